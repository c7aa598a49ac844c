mod cli;
mod feed;

use std::path::Path;
use std::sync::{Arc, Mutex};

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use framesync_bridge::{
    EmbeddedFrame, FrameDocument, FrameHeightSynchronizer, HeightLimits, MessageChannel,
    OriginPolicy, TargetPolicy,
};
use framesync_common::FrameId;
use framesync_config::FramesyncConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config loads before logging init so [logging] can take effect; load
    // failures are logged right after init.
    let mut load_error = None;
    let config = match args.config.as_deref() {
        Some(path) => framesync_config::toml_loader::load_from_path(Path::new(path)),
        None => framesync_config::load_config(),
    }
    .unwrap_or_else(|e| {
        load_error = Some(e);
        FramesyncConfig::default()
    });

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or(&config.logging.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("framesync v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::info!(
        mode = %config.sync.mode,
        origins = config.origins.allow.len(),
        frames = config.frames.declare.len(),
        "Config loaded"
    );

    // Build the host document from declared frames
    let mut doc = FrameDocument::new();
    for decl in &config.frames.declare {
        let frame = match &decl.src {
            Some(src) => EmbeddedFrame::with_src(decl.id.as_str(), src.as_str()),
            None => EmbeddedFrame::new(decl.id.as_str()),
        };
        doc.insert(frame);
    }

    let policy = if config.sync.mode == "addressed" {
        TargetPolicy::Addressed
    } else {
        let target = FrameId::new(config.sync.fixed_target.as_str());
        if !doc.contains(&target) {
            tracing::warn!(
                frame = %target,
                "fixed target is not a declared frame; size reports will be ignored"
            );
        }
        TargetPolicy::Fixed(target)
    };
    let limits = HeightLimits {
        min: config.sync.min_height,
        max: config.sync.max_height,
    };

    let document = Arc::new(Mutex::new(doc));
    let channel = MessageChannel::new();
    let sync = Arc::new(
        FrameHeightSynchronizer::new(
            policy,
            OriginPolicy::from_entries(&config.origins.allow),
            Arc::clone(&document),
        )
        .with_limits(limits),
    );
    let subscription = sync.attach(&channel);
    tracing::info!(listeners = channel.listener_count(), "synchronizer attached");

    // Feed envelopes until end of input
    let trace_messages = config.logging.trace_messages;
    let stats = if args.input == "-" {
        tracing::info!("reading envelopes from stdin");
        feed::run(BufReader::new(tokio::io::stdin()), &channel, trace_messages).await
    } else {
        tracing::info!("reading envelopes from {}", args.input);
        match tokio::fs::File::open(&args.input).await {
            Ok(file) => feed::run(BufReader::new(file), &channel, trace_messages).await,
            Err(e) => {
                tracing::error!("cannot open {}: {e}", args.input);
                std::process::exit(1);
            }
        }
    };

    // Tear down the listener before reporting
    subscription.unsubscribe();

    let events = sync.drain_events();
    let applied = events.iter().filter(|e| e.is_applied()).count();
    tracing::info!(
        delivered = stats.delivered,
        skipped = stats.skipped,
        applied,
        ignored = events.len() - applied,
        "feed complete"
    );

    if let Ok(doc) = document.lock() {
        match serde_json::to_string_pretty(&doc.style_report()) {
            Ok(report) => println!("{report}"),
            Err(e) => tracing::error!("failed to render style report: {e}"),
        }
    }
    tracing::info!("Shutdown complete");
}
