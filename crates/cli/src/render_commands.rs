//! CLI subcommands that render and inspect bot replies.

use std::{
    io::{Read, Write},
    path::Path,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use {
    anyhow::{Context, Result, anyhow},
    async_trait::async_trait,
    botmux_channels::{ChunkSink, ReplyTarget, RendererRegistry, deliver_chunks},
    botmux_markup::{format, spans, split},
    botmux_telegram::{
        ParseMode, TelegramFormatConfig, TelegramMarkdownV2, TelegramOutbound, load_config,
    },
    clap::{Args, ValueEnum},
    serde_json::json,
    tracing::{debug, info},
};

/// Channel rendered by default.
pub const DEFAULT_CHANNEL: &str = "telegram";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ParseModeArg {
    MarkdownV2,
    Html,
}

impl From<ParseModeArg> for ParseMode {
    fn from(arg: ParseModeArg) -> Self {
        match arg {
            ParseModeArg::MarkdownV2 => Self::MarkdownV2,
            ParseModeArg::Html => Self::Html,
        }
    }
}

#[derive(Args, Clone, Debug)]
pub struct RenderArgs {
    /// Message text. Read from stdin when omitted.
    #[arg(short, long)]
    pub message: Option<String>,
    /// Channel whose renderer is used.
    #[arg(long, default_value = DEFAULT_CHANNEL)]
    pub channel: String,
    /// Overrides `parse_mode` from the config file.
    #[arg(long, value_enum)]
    pub parse_mode: Option<ParseModeArg>,
    /// Overrides `max_message_len`: chunks stay below this many bytes.
    #[arg(long)]
    pub max_len: Option<usize>,
    /// Overrides `boundary`: preferred split point between chunks.
    #[arg(long)]
    pub boundary: Option<String>,
    /// Chat the reply is addressed to.
    #[arg(long, default_value = "stdout")]
    pub chat_id: String,
    /// Inbound message ID the reply answers.
    #[arg(long)]
    pub reply_to: Option<String>,
    /// Print the chunks as a JSON array instead of delivering them.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct ScanArgs {
    /// Message text. Read from stdin when omitted.
    #[arg(short, long)]
    pub message: Option<String>,
}

// ── Sink ────────────────────────────────────────────────────────────────────

/// Writes each chunk to `out` under a numbered header.
pub struct WriterSink<W> {
    out: Mutex<W>,
    sent: AtomicUsize,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            sent: AtomicUsize::new(0),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.out
            .into_inner()
            .map_err(|_| anyhow!("output writer poisoned"))
    }
}

#[async_trait]
impl<W: Write + Send> ChunkSink for WriterSink<W> {
    async fn send_chunk(&self, target: &ReplyTarget, chunk: &str) -> botmux_channels::Result<()> {
        let n = self.sent.fetch_add(1, Ordering::Relaxed) + 1;
        let reply = target
            .reply_to_message_id
            .as_deref()
            .map(|id| format!(", reply to {id}"))
            .unwrap_or_default();
        let header = format!(
            "--- chunk {n} to {}{reply} ({} bytes) ---",
            target.chat_id,
            chunk.len()
        );
        let mut out = self
            .out
            .lock()
            .map_err(|_| botmux_channels::Error::invalid_input("output writer poisoned"))?;
        write_chunk(&mut *out, &header, chunk)
            .map_err(|e| botmux_channels::Error::external("write chunk", e))
    }
}

fn write_chunk(out: &mut impl Write, header: &str, chunk: &str) -> std::io::Result<()> {
    writeln!(out, "{header}")?;
    out.write_all(chunk.as_bytes())?;
    if !chunk.ends_with('\n') {
        writeln!(out)?;
    }
    out.flush()
}

// ── Handlers ────────────────────────────────────────────────────────────────

/// Build the render config: the file (or defaults), then CLI overrides.
pub fn resolve_config(args: &RenderArgs, config: Option<&Path>) -> Result<TelegramFormatConfig> {
    let mut cfg = match config {
        Some(path) => load_config(path)?,
        None => TelegramFormatConfig::default(),
    };
    if let Some(mode) = args.parse_mode {
        cfg.parse_mode = mode.into();
    }
    if let Some(max_len) = args.max_len {
        cfg.max_message_len = max_len;
    }
    if let Some(boundary) = &args.boundary {
        cfg.boundary.clone_from(boundary);
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Renderers known to the CLI, keyed by channel.
pub fn renderer_registry(cfg: &TelegramFormatConfig) -> RendererRegistry {
    let mut registry = RendererRegistry::new();
    registry.register(
        DEFAULT_CHANNEL,
        Box::new(TelegramMarkdownV2::with_superscript(cfg.superscript_policy)),
    );
    registry
}

/// Render `message` for `channel` into ordered chunks.
pub fn render_chunks(message: &str, channel: &str, cfg: &TelegramFormatConfig) -> Vec<String> {
    if channel == DEFAULT_CHANNEL {
        return botmux_telegram::render_reply(message, cfg).chunks;
    }
    let registry = renderer_registry(cfg);
    if registry.get(channel).is_none() {
        debug!(channel, "no renderer registered, stripping markup");
    }
    let text = format(message, registry.resolve(channel));
    split(&text, &cfg.boundary, cfg.max_message_len)
}

pub async fn handle_render(args: RenderArgs, config: Option<&Path>) -> Result<()> {
    let cfg = resolve_config(&args, config)?;
    let message = read_message(args.message.as_deref())?;

    if args.json {
        let chunks = render_chunks(&message, &args.channel, &cfg);
        println!("{}", serde_json::to_string_pretty(&chunks)?);
        return Ok(());
    }

    let mut target = ReplyTarget::new(&args.chat_id);
    if let Some(id) = &args.reply_to {
        target = target.replying_to(id);
    }
    let sink = WriterSink::new(std::io::stdout());

    let sent = if args.channel == DEFAULT_CHANNEL {
        let parse_mode = cfg.parse_mode.as_api_str();
        let outbound = TelegramOutbound::new(sink, cfg)?;
        let sent = outbound.send_reply(&target, &message).await?;
        info!(sent, parse_mode, "reply delivered");
        sent
    } else {
        let chunks = render_chunks(&message, &args.channel, &cfg);
        let sent = deliver_chunks(&sink, &target, &chunks).await?;
        info!(sent, channel = %args.channel, "reply delivered");
        sent
    };
    debug!(sent, chat_id = %target.chat_id, "render finished");
    Ok(())
}

/// Print one JSON line per span, with byte offsets into the raw message.
pub fn handle_scan(args: ScanArgs) -> Result<()> {
    let message = read_message(args.message.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in scan_lines(&message) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// JSON records for every span in `message`.
pub fn scan_lines(message: &str) -> Vec<serde_json::Value> {
    spans(message)
        .map(|span| {
            json!({
                "start": span.start,
                "end": span.end,
                "kind": span.kind.as_str(),
                "inner": span.inner(message),
            })
        })
        .collect()
}

/// Use `message` if given, otherwise read all of stdin.
fn read_message(message: Option<&str>) -> Result<String> {
    if let Some(message) = message {
        return Ok(message.to_owned());
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read message from stdin")?;
    Ok(buf)
}
