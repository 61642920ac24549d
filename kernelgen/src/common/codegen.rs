use std::{fs, path::Path};

use anyhow::Context;
use proc_macro2::TokenStream;

use crate::warn_log;

/// Pretty-prints generated tokens, prefixed with `header` lines.
pub fn render_tokens(
    tokens: impl Into<TokenStream>,
    header: &str,
) -> anyhow::Result<String> {
    let parsed: syn::File =
        syn::parse2(tokens.into()).context("cannot parse generated bindings")?;

    let mut rendered = String::with_capacity(header.len());
    for line in header.lines() {
        rendered.push_str("// ");
        rendered.push_str(line);
        rendered.push('\n');
    }
    rendered.push('\n');
    rendered.push_str(&prettyplease::unparse(&parsed));

    Ok(rendered)
}

pub fn write_rendered(
    rendered: &str,
    file: &Path,
    rustfmt: bool,
) -> anyhow::Result<()> {
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("cannot create directory {}", parent.display())
        })?;
    }

    fs::write(file, rendered)
        .with_context(|| format!("cannot write file {}", file.display()))?;

    if rustfmt {
        match std::process::Command::new("rustfmt")
            .args(["--edition", "2024"])
            .arg(file)
            .status()
        {
            Ok(status) if !status.success() => {
                warn_log!("rustfmt exited with {status} on {}", file.display())
            },
            Ok(_) => {},
            Err(e) => warn_log!("rustfmt failed: {e}"),
        }
    }

    Ok(())
}
