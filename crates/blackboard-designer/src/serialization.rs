//! Serialization and deserialization for board design files.
//!
//! Two formats are supported:
//! - Plain text (default): one figure per line,
//!   `<keyword> <x> <y> <params…> <fill|frame> [color]`, with `#` comments.
//! - JSON (`.json` extension): a versioned [`DesignFile`] document.
//!
//! Decoding is all-or-nothing: the first bad record aborts the whole file.

use std::io::{BufRead, Write};
use std::path::Path;

use blackboard_core::{PersistenceError, Position, FILE_FORMAT_VERSION};
use serde::{Deserialize, Serialize};

use crate::figure::Figure;
use crate::model::{FillMode, GlyphShape, Shape, ShapeType};

/// On-disk format of a design file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Text,
    Json,
}

impl FileFormat {
    /// Picks the format from the file extension; anything but `.json` is text.
    pub fn from_path(path: &Path) -> Self {
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            FileFormat::Json
        } else {
            FileFormat::Text
        }
    }
}

/// Complete JSON design document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    pub figures: Vec<Figure>,
}

impl DesignFile {
    pub fn new(figures: Vec<Figure>) -> Self {
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            figures,
        }
    }

    /// Parses a document and re-checks every shape's parameters.
    pub fn from_json(content: &str) -> Result<Self, PersistenceError> {
        let design: DesignFile = serde_json::from_str(content)?;
        for (idx, figure) in design.figures.iter().enumerate() {
            figure
                .shape
                .validate()
                .map_err(|e| PersistenceError::MalformedRecord {
                    line: idx + 1,
                    reason: e.to_string(),
                })?;
        }
        Ok(design)
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Encodes one figure as a text record.
pub fn encode_record(figure: &Figure) -> String {
    let mut parts = vec![
        figure.shape_type().keyword().to_string(),
        figure.position.x.to_string(),
        figure.position.y.to_string(),
    ];
    parts.extend(figure.shape.params());
    parts.push(figure.fill.to_string());
    if !figure.color.is_empty() {
        parts.push(figure.color.clone());
    }
    parts.join(" ")
}

/// Decodes one text record. `line` is only used for error reporting.
pub fn decode_record(line: usize, record: &str) -> Result<Figure, PersistenceError> {
    let tokens: Vec<&str> = record.split_whitespace().collect();
    let malformed = |reason: String| PersistenceError::MalformedRecord { line, reason };

    let keyword = tokens.first().copied().unwrap_or_default();
    let shape_type =
        ShapeType::from_keyword(keyword).ok_or_else(|| PersistenceError::UnknownKeyword {
            line,
            keyword: keyword.to_string(),
        })?;

    let param_end = 3 + shape_type.param_count();
    if tokens.len() < param_end + 1 {
        return Err(malformed(format!(
            "expected at least {} fields for {}, found {}",
            param_end + 1,
            shape_type,
            tokens.len()
        )));
    }

    let coord = |token: &str| {
        token
            .parse::<i32>()
            .map_err(|_| malformed(format!("invalid coordinate '{}'", token)))
    };
    let position = Position::new(coord(tokens[1])?, coord(tokens[2])?);

    let shape = Shape::from_params(shape_type, &tokens[3..param_end])
        .map_err(|e| malformed(e.to_string()))?;

    let fill: FillMode = tokens[param_end]
        .parse()
        .map_err(|mode| malformed(format!("unknown fill mode '{}'", mode)))?;

    let color = tokens[param_end + 1..].join(" ");
    Ok(Figure::new(shape, position, color, fill))
}

/// Reads every record of a text design, paired with its 1-based line number.
pub fn read_text<R: BufRead>(reader: R) -> Result<Vec<(usize, Figure)>, PersistenceError> {
    let mut figures = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        figures.push((idx + 1, decode_record(idx + 1, trimmed)?));
    }
    Ok(figures)
}

/// Writes a text design, one record per figure in draw order.
pub fn write_text<'a, W, I>(mut writer: W, figures: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Figure>,
{
    writeln!(writer, "# blackboard design v{}", FILE_FORMAT_VERSION)?;
    for figure in figures {
        writeln!(writer, "{}", encode_record(figure))?;
    }
    writer.flush()
}
