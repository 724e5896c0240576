//! Terminal inspector for the luklak demo.
//!
//! Examples:
//!   luklak-cli classify "We run a freight forwarding business"
//!   luklak-cli show "marketing agency with 12 clients" --view kanban
//!   luklak-cli show "construction firm" --function func_1 --select obj_4
//!   luklak-cli structure construction
//!   luklak-cli catalog --search invoice --category sub-object
//!   luklak-cli export "logistics company"
//!
//! Settings come from `--config <path>`, else the per-user config file when it
//! exists. `--instant` skips the simulated generation delay.

mod paths;
mod render;

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use luklak::catalog::{filter_definitions, CatalogSummary, CategoryFilter};
use luklak::fixtures::object_definitions;
use luklak::generation::{submit, BriefingState, SimulatedGenerator, Sleep};
use luklak::{classify_industry, Industry, SessionStore, UiConfig, ViewMode};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error>;

#[derive(Debug, Clone, Copy, Default)]
struct TokioSleep;

impl Sleep for TokioSleep {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

fn usage() -> ! {
    eprintln!(
        "Usage: luklak-cli [--config <path>] [--instant] <command> [args]\n\
         \n\
         Commands:\n\
         \x20 classify <brief...>\n\
         \x20 show <brief...> [--function <id>] [--view <mode>] [--select <object>]\n\
         \x20 structure [industry]\n\
         \x20 catalog [--search <text>] [--category <all|object|sub-object>]\n\
         \x20 export <brief...>"
    );
    process::exit(2);
}

#[derive(Debug, Default)]
struct Globals {
    config: Option<PathBuf>,
    instant: bool,
}

/// Splits global flags from the command and its arguments.
fn parse_globals(args: Vec<String>) -> (Globals, Vec<String>) {
    let mut globals = Globals::default();
    let mut rest = Vec::new();
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => match it.next() {
                Some(path) => globals.config = Some(PathBuf::from(path)),
                None => usage(),
            },
            "--instant" => globals.instant = true,
            "-h" | "--help" => usage(),
            _ => rest.push(arg),
        }
    }
    (globals, rest)
}

/// Pulls `--name value` pairs out of `args`, leaving the positional words.
fn take_option(args: &mut Vec<String>, name: &str) -> Option<String> {
    let at = args.iter().position(|a| a == name)?;
    if at + 1 >= args.len() {
        usage();
    }
    let value = args.remove(at + 1);
    args.remove(at);
    Some(value)
}

fn load_config(globals: &Globals) -> Result<UiConfig, BoxError> {
    let path = globals
        .config
        .clone()
        .or_else(|| paths::default_config_file().filter(|p| p.exists()));
    let cfg = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            UiConfig::load(&path)?
        }
        None => UiConfig::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

fn brief_from(words: &[String]) -> String {
    if words.is_empty() {
        usage();
    }
    words.join(" ")
}

async fn generate_into(
    store: &mut SessionStore,
    brief: &str,
    cfg: &UiConfig,
    instant: bool,
) -> Result<(), BoxError> {
    let latency = if instant { Duration::ZERO } else { cfg.generation_latency() };
    let generator = SimulatedGenerator::with_latency(TokioSleep, latency);
    let mut briefing = BriefingState::default();
    briefing.set_input(brief);
    if !submit(&generator, &mut briefing, store).await {
        return Err("brief is empty".into());
    }
    Ok(())
}

async fn cmd_show(mut args: Vec<String>, cfg: &UiConfig, instant: bool) -> Result<(), BoxError> {
    let function = take_option(&mut args, "--function");
    let view = take_option(&mut args, "--view")
        .map(|v| v.parse::<ViewMode>())
        .transpose()?;
    let select = take_option(&mut args, "--select");
    let brief = brief_from(&args);

    let mut store = SessionStore::new();
    generate_into(&mut store, &brief, cfg, instant).await?;
    if let Some(id) = function {
        store.focus_function(&id)?;
    }
    if let Some(id) = select {
        store.select_object_by_id(&id)?;
    }

    let Some(scenario) = store.scenario() else {
        return Err("no scenario was installed".into());
    };
    let mode = view.unwrap_or_else(|| {
        store
            .selected_function()
            .map(|f| ViewMode::initial_for(f.view_type))
            .unwrap_or_default()
    });
    info!(company = %scenario.meta.company_name, mode = mode.label(), "showing scenario");

    print!("{}", render::header(scenario, store.selected_function()));
    println!();
    print!("{}", render::view(mode, &store, cfg));

    if mode.shows_detail_panel() {
        if let Some(object) = store.selected_object() {
            let panel = luklak::detail::DetailPanel::build(
                object,
                store.selected_function(),
                store.chat_for_object(object.id.as_str()),
                cfg,
            );
            println!();
            print!("{}", render::detail(&panel));
        }
    }
    Ok(())
}

fn cmd_structure(args: &[String]) -> Result<(), BoxError> {
    let industries = match args.first() {
        Some(name) => vec![name.parse::<Industry>()?],
        None => Industry::all().to_vec(),
    };
    for (i, industry) in industries.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("== {industry} ==");
        print!("{}", render::spaces(&industry.structure()));
    }
    Ok(())
}

fn cmd_catalog(mut args: Vec<String>, cfg: &UiConfig) -> Result<(), BoxError> {
    let search = take_option(&mut args, "--search").unwrap_or_default();
    let category = take_option(&mut args, "--category")
        .map(|c| c.parse::<CategoryFilter>())
        .transpose()?
        .unwrap_or_default();
    let defs = object_definitions();
    let summary = CatalogSummary::of(&defs);
    let hits = filter_definitions(&defs, &search, category);
    print!("{}", render::catalog(&hits, &summary, cfg));
    Ok(())
}

async fn cmd_export(args: &[String], cfg: &UiConfig, instant: bool) -> Result<(), BoxError> {
    let brief = brief_from(args);
    let mut store = SessionStore::new();
    generate_into(&mut store, &brief, cfg, instant).await?;
    let Some(scenario) = store.scenario() else {
        return Err("no scenario was installed".into());
    };
    println!("{}", serde_json::to_string_pretty(scenario)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let (globals, mut args) = parse_globals(std::env::args().skip(1).collect());
    if args.is_empty() {
        usage();
    }
    let command = args.remove(0);
    let cfg = load_config(&globals)?;

    match command.as_str() {
        "classify" => {
            let brief = brief_from(&args);
            let industry = classify_industry(&brief);
            let scenario = industry.scenario();
            println!(
                "{industry}\t{}\t{}",
                scenario.meta.company_name, scenario.active_space.name
            );
        }
        "show" => cmd_show(args, &cfg, globals.instant).await?,
        "structure" => cmd_structure(&args)?,
        "catalog" => cmd_catalog(args, &cfg)?,
        "export" => cmd_export(&args, &cfg, globals.instant).await?,
        _ => usage(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn globals_are_lifted_out_anywhere() {
        let (g, rest) = parse_globals(words("show --instant a brief --config /tmp/c.json"));
        assert!(g.instant);
        assert_eq!(g.config, Some(PathBuf::from("/tmp/c.json")));
        assert_eq!(rest, words("show a brief"));
    }

    #[test]
    fn take_option_removes_pair() {
        let mut args = words("a --view kanban b");
        assert_eq!(take_option(&mut args, "--view").as_deref(), Some("kanban"));
        assert_eq!(args, words("a b"));
        assert_eq!(take_option(&mut args, "--view"), None);
    }

    #[tokio::test]
    async fn instant_generation_installs_scenario() {
        let mut store = SessionStore::new();
        generate_into(&mut store, "construction site crew", &UiConfig::default(), true)
            .await
            .unwrap();
        let scenario = store.scenario().unwrap();
        assert_eq!(scenario.meta.industry, "Construction");
        assert!(store.selected_function().is_some());
    }

    #[tokio::test]
    async fn blank_brief_is_rejected() {
        let mut store = SessionStore::new();
        let err = generate_into(&mut store, "   ", &UiConfig::default(), true).await;
        assert!(err.is_err());
        assert!(store.scenario().is_none());
    }
}
