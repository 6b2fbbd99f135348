//! Operator confirmation before clobbering an existing wallet file.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::{Result, SetupError};

pub trait OverwritePrompt {
    /// Ask whether `path` may be overwritten. `false` means leave it alone.
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool>;
}

/// Non-interactive approval (`--yes`)
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl OverwritePrompt for AssumeYes {
    fn confirm_overwrite(&mut self, _path: &Path) -> Result<bool> {
        Ok(true)
    }
}

/// Line-based prompt. Only an exact `y` or `Y` approves; anything else, including an
/// empty line or EOF, declines.
pub struct StdioPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdioPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> OverwritePrompt for StdioPrompt<R, W> {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        write!(
            self.output,
            "Wallet file '{}' already exists. Overwrite? (y/N): ",
            name
        )
        .and_then(|_| self.output.flush())
        .map_err(|e| SetupError::io("<stdout>", e))?;

        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .map_err(|e| SetupError::io("<stdin>", e))?;

        Ok(answer.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str) -> (bool, String) {
        let mut out = Vec::new();
        let approved = StdioPrompt::new(Cursor::new(input.as_bytes()), &mut out)
            .confirm_overwrite(Path::new("/tmp/user-wallet.json"))
            .unwrap();
        (approved, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_only_y_approves() {
        assert!(ask("y\n").0);
        assert!(ask("Y\n").0);
        assert!(!ask("yes\n").0);
        assert!(ask("y\r\n").0);
        assert!(ask("y").0);
        assert!(!ask("n\n").0);
    }

    #[test]
    fn test_padded_answer_declines() {
        assert!(!ask(" y\n").0);
        assert!(!ask("y \n").0);
        assert!(!ask("\ty\n").0);
    }

    #[test]
    fn test_default_declines() {
        assert!(!ask("\n").0);
        assert!(!ask("").0);
    }

    #[test]
    fn test_prompt_names_the_file() {
        let (_, shown) = ask("n\n");
        assert_eq!(
            shown,
            "Wallet file 'user-wallet.json' already exists. Overwrite? (y/N): "
        );
    }
}
