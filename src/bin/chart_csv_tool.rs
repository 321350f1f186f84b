use chart_csv::api::{ChartWorkbench, TableSummary};
use chart_csv::core::{ChartConfiguration, ChartKind, ChartProjection, TableParserConfig};
use chart_csv::error::ChartError;
use chart_csv::render::NullRenderer;
use chart_csv::telemetry::init_default_tracing;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: chart_csv_tool <file.csv> [--kind <bar|line|pie>] [--fields <label,value>] [--delimiter <char>] [--suggestions <answer.json> [--apply <index>]] [--output <path>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    kind: Option<ChartKind>,
    fields: Option<(String, String)>,
    delimiter: Option<char>,
    suggestions: Option<PathBuf>,
    apply: Option<usize>,
    output: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolReport<'a> {
    table: TableSummary,
    configuration: Option<&'a ChartConfiguration>,
    projection: ChartProjection,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let text = read_file(&args.input).map_err(|err| err.to_string())?;

    let mut parser_config = TableParserConfig::default();
    if let Some(delimiter) = args.delimiter {
        parser_config = parser_config.with_delimiter(delimiter);
    }
    let mut workbench = ChartWorkbench::new(NullRenderer::default()).with_parser_config(parser_config);
    let file_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    workbench.load(file_name, &text);

    if let Some(path) = &args.suggestions {
        let answer = read_file(path).map_err(|err| err.to_string())?;
        let count = workbench
            .load_suggestions(&answer)
            .map_err(|err| err.to_string())?;
        if let Some(index) = args.apply {
            workbench
                .apply_suggestion_at(index)
                .map_err(|err| err.to_string())?;
        } else if count > 0 {
            workbench
                .apply_suggestion_at(0)
                .map_err(|err| err.to_string())?;
        }
    }
    if let Some(kind) = args.kind {
        workbench.set_kind(kind);
    }
    if let Some((label, value)) = args.fields {
        workbench.set_fields(Some(label), Some(value));
    }

    let report = ToolReport {
        table: workbench.summary(),
        configuration: workbench.configuration(),
        projection: workbench.projection(),
    };
    let payload = serde_json::to_string_pretty(&report)
        .map_err(|err| format!("failed to serialize json: {err}"))?;

    match &args.output {
        Some(path) => fs::write(path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{payload}");
            Ok(())
        }
    }
}

fn read_file(path: &Path) -> Result<String, ChartError> {
    fs::read_to_string(path).map_err(|source| ChartError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let input = match args.next() {
        Some(flag) if flag == "--help" || flag == "-h" => return Err(USAGE.to_owned()),
        Some(path) => PathBuf::from(path),
        None => return Err(USAGE.to_owned()),
    };

    let mut parsed = CliArgs {
        input,
        kind: None,
        fields: None,
        delimiter: None,
        suggestions: None,
        apply: None,
        output: None,
    };

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--kind" => parsed.kind = Some(ChartKind::from_label(&value()?)),
            "--fields" => {
                let raw = value()?;
                let (label, field) = raw
                    .split_once(',')
                    .ok_or_else(|| format!("--fields expects `label,value`, got `{raw}`"))?;
                parsed.fields = Some((label.trim().to_owned(), field.trim().to_owned()));
            }
            "--delimiter" => {
                let raw = value()?;
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(delimiter), None) => parsed.delimiter = Some(delimiter),
                    _ => return Err(format!("--delimiter expects one character, got `{raw}`")),
                }
            }
            "--suggestions" => parsed.suggestions = Some(PathBuf::from(value()?)),
            "--apply" => {
                let raw = value()?;
                let index = raw
                    .parse::<usize>()
                    .map_err(|err| format!("invalid --apply index `{raw}`: {err}"))?;
                parsed.apply = Some(index);
            }
            "--output" => parsed.output = Some(PathBuf::from(value()?)),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    Ok(parsed)
}
