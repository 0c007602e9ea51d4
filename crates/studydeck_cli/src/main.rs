//! Command-line probe over the core utilities.
//!
//! # Responsibility
//! - Run one core operation per invocation and print its result.
//! - Keep output deterministic for quick local sanity checks.
//!
//! # See also
//! - `STUDYDECK_LOCALE`: optional path to a JSON locale document.

use std::env;
use std::error::Error;
use std::process::ExitCode;
use studydeck_core::{
    add_tags, canonify_tags, checksum, core_version, del_tags, dehexify_id, field_checksum,
    hexify_id, strip_html, strip_html_media, ConfiguredLocale, LocaleConfig, SpanFormatter,
    SpanOptions,
};

const USAGE: &str = "usage:
  studydeck span <seconds> [--short] [--after] [--places N] [--pad N]
  studydeck strip [--media] <html>
  studydeck tags canon <tag>...
  studydeck tags add <to-add> <tags>
  studydeck tags del <to-remove> <tags>
  studydeck hexid <id>
  studydeck dehexid <hex>
  studydeck checksum <text>
  studydeck version";

fn main() -> ExitCode {
    let args = env::args().skip(1).collect::<Vec<_>>();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<String, Box<dyn Error>> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(USAGE.to_string());
    };

    match command.as_str() {
        "span" => span_command(rest),
        "strip" => match rest {
            [flag, html] if flag == "--media" => Ok(strip_html_media(html)),
            [html] => Ok(strip_html(html)),
            _ => Err("strip expects one html argument".into()),
        },
        "tags" => tags_command(rest),
        "hexid" => {
            let id = single_arg(rest, "hexid")?.parse::<i64>()?;
            Ok(hexify_id(id))
        }
        "dehexid" => Ok(dehexify_id(single_arg(rest, "dehexid")?)?.to_string()),
        "checksum" => {
            let text = single_arg(rest, "checksum")?;
            Ok(format!("{} {}", checksum(text), field_checksum(text)))
        }
        "version" => Ok(core_version().to_string()),
        "help" | "--help" => Ok(USAGE.to_string()),
        other => Err(format!("unknown command `{other}`").into()),
    }
}

fn span_command(args: &[String]) -> Result<String, Box<dyn Error>> {
    let mut seconds = None;
    let mut options = SpanOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--short" => options.short = true,
            "--after" => options.after = true,
            "--places" => options.decimal_places = flag_value(iter.next(), "--places")?,
            "--pad" => options.pad = flag_value(iter.next(), "--pad")?,
            value => seconds = Some(value.parse::<f64>()?),
        }
    }
    let seconds = seconds.ok_or("span expects a number of seconds")?;
    Ok(SpanFormatter::new(load_locale()?).format(seconds, &options))
}

fn tags_command(args: &[String]) -> Result<String, Box<dyn Error>> {
    match args {
        [action, tags @ ..] if action == "canon" => Ok(canonify_tags(tags)),
        [action, to_add, tags] if action == "add" => Ok(add_tags(to_add, tags)),
        [action, to_remove, tags] if action == "del" => Ok(del_tags(to_remove, tags)),
        _ => Err("tags expects `canon`, `add` or `del`".into()),
    }
}

fn load_locale() -> Result<ConfiguredLocale, Box<dyn Error>> {
    match env::var("STUDYDECK_LOCALE") {
        Ok(path) if !path.trim().is_empty() => {
            Ok(ConfiguredLocale::new(LocaleConfig::load(path.trim())?)?)
        }
        _ => Ok(ConfiguredLocale::default()),
    }
}

fn single_arg<'a>(args: &'a [String], command: &str) -> Result<&'a str, Box<dyn Error>> {
    match args {
        [value] => Ok(value.as_str()),
        _ => Err(format!("{command} expects exactly one argument").into()),
    }
}

fn flag_value(value: Option<&String>, flag: &str) -> Result<usize, Box<dyn Error>> {
    let raw = value.ok_or_else(|| format!("{flag} expects a value"))?;
    Ok(raw.parse::<usize>()?)
}

#[cfg(test)]
mod tests {
    use super::run;

    fn run_args(args: &[&str]) -> String {
        let owned = args.iter().map(|arg| arg.to_string()).collect::<Vec<_>>();
        run(&owned).expect("command should succeed")
    }

    #[test]
    fn span_command_honors_flags() {
        assert_eq!(run_args(&["span", "90", "--short"]), "1.5m");
        assert_eq!(run_args(&["span", "90", "--places", "0"]), "1 minute");
    }

    #[test]
    fn tags_and_ids_commands_print_wire_values() {
        assert_eq!(run_args(&["tags", "canon", "b", ":a"]), " a b ");
        assert_eq!(run_args(&["tags", "del", "a", " A a b "]), " b ");
        assert_eq!(run_args(&["hexid", "-1"]), "ffffffffffffffff");
        assert_eq!(run_args(&["dehexid", "ffffffffffffffff"]), "-1");
    }

    #[test]
    fn unknown_command_is_an_error() {
        let args = vec!["frobnicate".to_string()];
        assert!(run(&args).is_err());
    }
}
