use std::path::{Path, PathBuf};

use crate::error::SceneError;
use crate::raytracer::basics::{Color, Position};

/// A non-empty, comment-stripped, whitespace-tokenized OBJ/MTL line.
pub struct Line<'a> {
    pub number: usize,
    pub tokens: Vec<&'a str>,
}

pub fn tokenize_lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.lines().enumerate().filter_map(|(idx, raw)| {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.is_empty() {
            return None;
        }
        Some(Line {
            number: idx + 1,
            tokens,
        })
    })
}

pub fn parse_f64(path: &Path, line: usize, token: &str) -> Result<f64, SceneError> {
    token.parse::<f64>().map_err(|_| SceneError::BadToken {
        path: path.to_path_buf(),
        line,
        token: token.to_string(),
    })
}

/// Parse tokens `[1..4]` of a line as an xyz triple — the shared shape of
/// `v`, `vn`, `Ka`, `Kd`, `Ks`, `Ke`, and `al`.
pub fn parse_triple(path: &Path, line: &Line) -> Result<[f64; 3], SceneError> {
    if line.tokens.len() < 4 {
        return Err(SceneError::Malformed {
            path: path.to_path_buf(),
            line: line.number,
            what: format!("expected 3 numbers after '{}'", line.tokens[0]),
        });
    }
    Ok([
        parse_f64(path, line.number, line.tokens[1])?,
        parse_f64(path, line.number, line.tokens[2])?,
        parse_f64(path, line.number, line.tokens[3])?,
    ])
}

pub fn parse_position(path: &Path, line: &Line) -> Result<Position, SceneError> {
    let [x, y, z] = parse_triple(path, line)?;
    Ok(Position::new(x, y, z))
}

pub fn parse_color(path: &Path, line: &Line) -> Result<Color, SceneError> {
    let [r, g, b] = parse_triple(path, line)?;
    Ok(Color::new(r, g, b))
}

pub fn resolve_sibling(base: &Path, relative: &str) -> PathBuf {
    base.parent()
        .map(|dir| dir.join(relative))
        .unwrap_or_else(|| PathBuf::from(relative))
}

pub fn read_to_string(path: &Path) -> Result<String, SceneError> {
    std::fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })
}
