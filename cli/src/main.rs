//! SwapCodec CLI: decode and summarise router calldata from the terminal.
//!
//! # Commands
//! ```text
//! swapcodec decode       --calldata <hex> --abi <path.json> [--tokens <path.json>]
//! swapcodec decode-batch --file <calldata.txt> --abi <path.json> [--tokens <path.json>]
//! swapcodec selectors    --abi <path.json>
//! swapcodec info
//! ```
//!
//! Everything is read from local files; fetching transactions from a node
//! is left to other tools.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use swapcodec_core::DecodedCall;
use swapcodec_evm::{chunked_decode, decode_transaction_input_hex, ErrorMode, SelectorTable};
use swapcodec_observability::{init_tracing, LogConfig};
use swapcodec_router::{describe_with, RouterCall, SummaryConfig, TokenTable, SUPPORTED_METHODS};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "swapcodec",
    about = "Decode constant-product router calldata into readable summaries",
    long_about = "
SwapCodec CLI: decode transaction input against a contract ABI and, for
Uniswap V2 style router methods, print a one-line summary with token symbols
and human-readable amounts. Logs go to stderr; raise them with -v.
",
    version
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Token table and summary settings shared by the decode commands.
#[derive(clap::Args)]
struct SummaryArgs {
    /// Token list JSON (bare array or `{"tokens": [...]}`)
    #[arg(long)]
    tokens: Option<PathBuf>,
    /// Summary config JSON (native symbol, default decimals)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Label for the native asset, overrides the config file
    #[arg(long)]
    native_symbol: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one calldata blob and summarise it
    Decode {
        /// Raw calldata (0x-prefixed hex)
        #[arg(long)]
        calldata: String,
        /// Path to the contract ABI JSON file
        #[arg(long)]
        abi: PathBuf,
        #[command(flatten)]
        summary: SummaryArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode a file of calldata, one hex blob per line, in parallel
    #[command(name = "decode-batch")]
    DecodeBatch {
        /// File with one calldata per line ('#' comments and blank lines skipped)
        #[arg(long)]
        file: PathBuf,
        /// Path to the contract ABI JSON file
        #[arg(long)]
        abi: PathBuf,
        #[command(flatten)]
        summary: SummaryArgs,
        /// Calls decoded per parallel chunk
        #[arg(long, default_value_t = 1_000)]
        chunk_size: usize,
        /// What to do with calls that fail to decode
        #[arg(long, value_enum, default_value_t = Mode::Collect)]
        mode: Mode,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the method selectors of an ABI
    Selectors {
        /// Path to the contract ABI JSON file
        #[arg(long)]
        abi: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show SwapCodec build and capability info
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Skip,
    Collect,
    Throw,
}

impl From<Mode> for ErrorMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Skip => ErrorMode::Skip,
            Mode::Collect => ErrorMode::Collect,
            Mode::Throw => ErrorMode::Throw,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log = LogConfig::from_verbosity(cli.verbose);
    log.json = cli.log_json;
    init_tracing(&log).context("install tracing subscriber")?;

    match cli.command {
        Commands::Decode { calldata, abi, summary, json } => {
            cmd_decode(&calldata, &abi, &summary, json)
        }

        Commands::DecodeBatch { file, abi, summary, chunk_size, mode, json } => {
            cmd_decode_batch(&file, &abi, &summary, chunk_size, mode.into(), json)
        }

        Commands::Selectors { abi, json } => cmd_selectors(&abi, json),

        Commands::Info => cmd_info(),
    }
}

// ─── Loading ─────────────────────────────────────────────────────────────────

fn load_table(abi_path: &Path) -> Result<SelectorTable> {
    let abi_json = std::fs::read_to_string(abi_path)
        .with_context(|| format!("read ABI file '{}'", abi_path.display()))?;
    let table = SelectorTable::from_abi_json(&abi_json)
        .with_context(|| format!("build selector table from '{}'", abi_path.display()))?;
    debug!(methods = table.len(), abi = %abi_path.display(), "ABI loaded");
    Ok(table)
}

fn load_summary(args: &SummaryArgs) -> Result<(TokenTable, SummaryConfig)> {
    let tokens = match &args.tokens {
        Some(path) => TokenTable::from_json_file(path)
            .with_context(|| format!("load token list '{}'", path.display()))?,
        None => TokenTable::default(),
    };
    let mut config = match &args.config {
        Some(path) => SummaryConfig::from_json_file(path)
            .with_context(|| format!("load summary config '{}'", path.display()))?,
        None => SummaryConfig::default(),
    };
    if let Some(symbol) = &args.native_symbol {
        config.native_symbol = symbol.clone();
    }
    Ok((tokens, config))
}

// ─── Command implementations ─────────────────────────────────────────────────

fn cmd_decode(calldata: &str, abi_path: &Path, args: &SummaryArgs, as_json: bool) -> Result<()> {
    let table = load_table(abi_path)?;
    let (tokens, config) = load_summary(args)?;

    let call = decode_transaction_input_hex(&table, calldata).context("decode calldata")?;
    let router = RouterCall::from_call(&call).context("summarise call")?;
    let summary = router.summarize(&tokens, &config);

    if as_json {
        let out = serde_json::json!({
            "call": call,
            "signature": call.signature(),
            "router": router.is_supported().then_some(&router),
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_call(&call);
        match summary {
            Some(line) => println!("Summary:   {line}"),
            None => println!("Summary:   (no summary for '{}')", call.function_name),
        }
    }
    Ok(())
}

fn print_call(call: &DecodedCall) {
    println!("Function:  {}", call.function_name);
    println!("Selector:  {}", call.selector_hex());
    println!("Signature: {}", call.signature());
    println!("Inputs:");
    for param in &call.inputs {
        println!("  {} ({}): {}", param.name, param.ty, param.value);
    }
}

/// Read calldata lines, skipping blanks and `#` comments.
fn read_calldata_file(path: &Path) -> Result<Vec<Vec<u8>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read calldata file '{}'", path.display()))?;
    content
        .lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| {
            hex::decode(line.strip_prefix("0x").unwrap_or(line))
                .with_context(|| format!("{}:{n}: invalid hex", path.display()))
        })
        .collect()
}

fn cmd_decode_batch(
    file: &Path,
    abi_path: &Path,
    args: &SummaryArgs,
    chunk_size: usize,
    mode: ErrorMode,
    as_json: bool,
) -> Result<()> {
    let table = load_table(abi_path)?;
    let (tokens, config) = load_summary(args)?;
    let inputs = read_calldata_file(file)?;

    let output = chunked_decode(&table, &inputs, chunk_size, mode)?;

    let mut rows = Vec::with_capacity(output.calls.len());
    for (index, call) in &output.calls {
        let summary = match describe_with(call, &tokens, &config) {
            Ok(summary) => summary,
            Err(e) => {
                warn!(index, method = %call.function_name, error = %e, "cannot summarise call");
                None
            }
        };
        rows.push((*index, call, summary));
    }

    if as_json {
        let out = serde_json::json!({
            "total": inputs.len(),
            "calls": rows.iter().map(|(index, call, summary)| serde_json::json!({
                "index": index,
                "call": call,
                "summary": summary,
            })).collect::<Vec<_>>(),
            "errors": output.errors.iter().map(|(index, e)| serde_json::json!({
                "index": index,
                "kind": e.kind(),
                "error": e.to_string(),
            })).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for (index, call, summary) in &rows {
            match summary {
                Some(line) => println!("[{index}] {line}"),
                None => println!("[{index}] {} ({})", call.function_name, call.selector_hex()),
            }
        }
        for (index, e) in &output.errors {
            eprintln!("[{index}] ✗ {e}");
        }
        println!();
        println!(
            "{} calls: {} decoded, {} failed",
            inputs.len(),
            output.calls.len(),
            output.errors.len()
        );
    }
    Ok(())
}

fn cmd_selectors(abi_path: &Path, as_json: bool) -> Result<()> {
    let table = load_table(abi_path)?;

    if as_json {
        let out: Vec<_> = table
            .methods()
            .map(|m| {
                serde_json::json!({
                    "selector": m.selector_hex(),
                    "signature": m.signature(),
                    "router": SUPPORTED_METHODS.contains(&m.name()),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} methods in '{}'", table.len(), abi_path.display());
        for m in table.methods() {
            let marker = if SUPPORTED_METHODS.contains(&m.name()) { "✓" } else { " " };
            println!("  {} {marker} {}", m.selector_hex(), m.signature());
        }
        println!();
        println!("✓ = summarised by the router interpreter");
    }
    Ok(())
}

fn cmd_info() -> Result<()> {
    println!("SwapCodec v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Capabilities:");
    println!("  ✓ Function call decoding   (head/tail ABI, nested arrays and tuples)");
    println!("  ✓ Selector tables          (keccak256, from ABI JSON)");
    println!("  ✓ Parallel batch decode    (Rayon)");
    println!("  ✓ Router summaries         (Uniswap V2 style, {} methods)", SUPPORTED_METHODS.len());
    println!("  ✓ Token lists              (bare array or token-list JSON)");
    println!();
    println!("Router methods:");
    for name in SUPPORTED_METHODS {
        println!("  {name}");
    }
    Ok(())
}
