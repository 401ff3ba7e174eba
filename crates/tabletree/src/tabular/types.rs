//! Core types for table decoration: cell alignment and border styles.

use serde::{Deserialize, Serialize};

/// Text alignment within a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Center text (pad on both sides, odd space on the right).
    Center,
}

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// ASCII borders: +, -, |
    #[default]
    Ascii,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    Light,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

impl BorderStyle {
    pub(crate) fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top: ['+', '+', '+'],
                middle: ['+', '+', '+'],
                bottom: ['+', '+', '+'],
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top: ['┌', '┬', '┐'],
                middle: ['├', '┼', '┤'],
                bottom: ['└', '┴', '┘'],
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top: ['┏', '┳', '┓'],
                middle: ['┣', '╋', '┫'],
                bottom: ['┗', '┻', '┛'],
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top: ['╔', '╦', '╗'],
                middle: ['╠', '╬', '╣'],
                bottom: ['╚', '╩', '╝'],
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top: ['╭', '┬', '╮'],
                middle: ['├', '┼', '┤'],
                bottom: ['╰', '┴', '╯'],
            },
        }
    }
}

/// Box-drawing characters for a border style.
///
/// Each rule line is `[left, junction, right]`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top: [char; 3],
    pub middle: [char; 3],
    pub bottom: [char; 3],
}
