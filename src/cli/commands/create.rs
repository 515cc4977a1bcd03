//! Create command implementation
//!
//! Scaffolds a new project directory from a template directory. Template
//! entries carrying the scaffold-injection marker are never copied; the
//! listing helper filters them out at every level.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::cli::Output;
use crate::utils;

/// Execute the create command with the forwarded argument tokens
pub fn execute(args: &[String], output: &Output) -> Result<()> {
    let request = CreateRequest::from_args(args)?;

    let target = PathBuf::from(&request.project_name);
    if target.exists() {
        bail!("target directory '{}' already exists", request.project_name);
    }

    utils::log_package_version()?;
    output.step(&format!("Creating project '{}'", request.project_name));

    let copied = copy_dir(&request.template, &target)?;
    if copied == 0 {
        output.warning(&format!(
            "template directory '{}' had no files to copy",
            request.template.display()
        ));
    }

    output.success(&format!(
        "Project '{}' created ({} entries)",
        request.project_name, copied
    ));
    Ok(())
}

/// Parsed form of the tokens the router forwards to this handler
struct CreateRequest {
    project_name: String,
    template: PathBuf,
}

impl CreateRequest {
    fn from_args(args: &[String]) -> Result<Self> {
        let mut project_name = None;
        let mut template = None;

        let mut iter = args.iter();
        while let Some(token) = iter.next() {
            match token.as_str() {
                "--template" | "-t" => {
                    let dir = iter
                        .next()
                        .context("--template requires a directory argument")?;
                    template = Some(PathBuf::from(dir));
                }
                other if project_name.is_none() => project_name = Some(other.to_string()),
                other => bail!("unexpected argument '{other}'"),
            }
        }

        Ok(Self {
            project_name: project_name.context("usage: xst-cli create <project-name>")?,
            template: template.unwrap_or_else(default_template_dir),
        })
    }
}

/// The template directory bundled next to the crate's own manifest
fn default_template_dir() -> PathBuf {
    utils::root_path().join("templates")
}

/// Copy `src` into `dst` recursively, skipping inject-marker entries.
/// Returns the number of top-level entries copied.
fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    fs::create_dir_all(dst)
        .with_context(|| format!("failed to create directory '{}'", dst.display()))?;

    let names = utils::dir_file_names(src);
    for name in &names {
        let from = src.join(name);
        let to = dst.join(name);
        if from.is_dir() {
            copy_dir(&from, &to)?;
        } else {
            fs::copy(&from, &to)
                .with_context(|| format!("failed to copy '{}'", from.display()))?;
        }
    }
    Ok(names.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_name_and_template_flag() {
        let args: Vec<String> = ["demo", "--template", "/tmp/tpl"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let request = CreateRequest::from_args(&args).unwrap();
        assert_eq!(request.project_name, "demo");
        assert_eq!(request.template, PathBuf::from("/tmp/tpl"));
    }

    #[test]
    fn missing_name_is_an_error() {
        assert!(CreateRequest::from_args(&[]).is_err());
    }

    #[test]
    fn extra_positional_is_rejected() {
        let args: Vec<String> = ["demo", "extra"].iter().map(|s| s.to_string()).collect();
        assert!(CreateRequest::from_args(&args).is_err());
    }

    #[test]
    fn copy_skips_inject_entries_recursively() {
        let src = TempDir::new().unwrap();
        fs::write(src.path().join("a.txt"), "a").unwrap();
        fs::write(src.path().join("inject-template.xst"), "x").unwrap();
        fs::create_dir(src.path().join("sub")).unwrap();
        fs::write(src.path().join("sub").join("b.txt"), "b").unwrap();
        fs::write(src.path().join("sub").join("inject-template.json"), "{}").unwrap();

        let dst_root = TempDir::new().unwrap();
        let dst = dst_root.path().join("out");
        let copied = copy_dir(src.path(), &dst).unwrap();

        assert_eq!(copied, 2);
        assert!(dst.join("a.txt").exists());
        assert!(dst.join("sub").join("b.txt").exists());
        assert!(!dst.join("inject-template.xst").exists());
        assert!(!dst.join("sub").join("inject-template.json").exists());
    }

    #[test]
    fn copy_of_missing_template_copies_nothing() {
        let dst_root = TempDir::new().unwrap();
        let dst = dst_root.path().join("out");
        let copied = copy_dir(Path::new("/no/such/template"), &dst).unwrap();
        assert_eq!(copied, 0);
        assert!(dst.exists());
    }
}
