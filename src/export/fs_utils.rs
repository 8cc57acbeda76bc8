// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Verifica se un file può essere creato o sovrascritto.
///
/// - Se il file NON esiste → Ok
/// - Se esiste ed è abilitato `force` → Ok
/// - Se esiste, `force == false` e stdin è un terminale → chiede conferma
/// - Altrimenti → errore, nessuna sovrascrittura silenziosa
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if !io::stdin().is_terminal() {
        return Err(AppError::Export(format!(
            "{} exists (use --force to overwrite)",
            path.display()
        )));
    }

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}

/// Il report non deve mai sostituire il file sorgente.
pub(crate) fn ensure_distinct(output: &Path, input: &Path) -> AppResult<()> {
    let same = match (output.canonicalize(), input.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => output == input,
    };

    if same {
        return Err(AppError::Export(format!(
            "output would overwrite the input file: {}",
            input.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn new_file_or_force_is_writable() {
        let path = env::temp_dir().join("rattendance_fs_utils_new.xlsx");
        fs::remove_file(&path).ok();
        assert!(ensure_writable(&path, false).is_ok());

        fs::write(&path, b"x").unwrap();
        assert!(ensure_writable(&path, true).is_ok());
    }

    #[test]
    fn input_is_never_the_output() {
        let path = env::temp_dir().join("rattendance_fs_utils_in.xls");
        fs::write(&path, b"x").unwrap();
        assert!(ensure_distinct(&path, &path).is_err());
        assert!(ensure_distinct(&env::temp_dir().join("other.xlsx"), &path).is_ok());
    }
}
