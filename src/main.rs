use anyhow::Context;
use clap::Parser;
use gistify::adapters::intake;
use gistify::app::render::{render_summary, save_summary, RenderStyle};
use gistify::utils::error::{ErrorSeverity, GistError};
use gistify::utils::{logger, validation::Validate};
use gistify::{highlight, CliConfig, GistEngine, LocalStorage, Outcome, UploadedFile};
use std::io::IsTerminal;

fn exit_with(e: &GistError) -> ! {
    tracing::error!(
        "❌ Summarization failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 2,      // bad input
        ErrorSeverity::Medium => 4,   // backend, worth retrying
        ErrorSeverity::High => 1,     // configuration
        ErrorSeverity::Critical => 3, // filesystem
    };
    std::process::exit(exit_code);
}

async fn read_upload(config: &CliConfig) -> anyhow::Result<Option<UploadedFile>> {
    if let Some(text) = &config.text {
        return Ok(Some(UploadedFile::from_text(text.clone())));
    }

    if let Some(path) = &config.file {
        let storage = LocalStorage::new(".");
        return match intake::load_file(&storage, path).await {
            Ok(upload) => Ok(Some(upload)),
            Err(e) => exit_with(&e),
        };
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let text = std::io::read_to_string(stdin).context("failed to read text from stdin")?;
    Ok(Some(UploadedFile::from_text(text)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        exit_with(&e);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let upload = read_upload(&cli).await?;
    if let Some(upload) = &upload {
        tracing::info!(
            "📁 Received {} content{}",
            upload.kind,
            upload
                .name
                .as_ref()
                .map(|n| format!(" \"{}\"", n))
                .unwrap_or_default()
        );
    }

    let engine = GistEngine::new(config.build_backend());

    let explain = async {
        match &upload {
            Some(upload) => engine.explain(upload).await,
            None => Ok(None),
        }
    };
    let (summary, explanation) = tokio::join!(engine.run(upload.as_ref(), cli.format), explain);

    let result = match summary {
        Ok(Outcome::Completed(result)) => result,
        Ok(Outcome::Superseded { id, latest }) => {
            tracing::warn!("Request {} was superseded by {}", id, latest);
            return Ok(());
        }
        Err(e) => exit_with(&e),
    };

    let explanation = match explanation {
        Ok(outcome) => outcome.and_then(Outcome::completed),
        Err(e) => {
            tracing::warn!("Image explanation unavailable: {}", e);
            None
        }
    };

    if config.json_output() {
        let output = serde_json::json!({
            "summary": &result,
            "highlights": result
                .bullet_items()
                .iter()
                .map(|item| highlight(item, &result.keywords))
                .collect::<Vec<_>>(),
            "explanation": explanation,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let style = if cli.plain {
            RenderStyle::Plain
        } else if cli.markdown {
            RenderStyle::Markdown
        } else if std::io::stdout().is_terminal() {
            RenderStyle::Ansi
        } else {
            RenderStyle::Plain
        };

        println!("{}", render_summary(&result, style));
        if let Some(explanation) = &explanation {
            println!();
            println!("Image Explanation");
            println!();
            println!("{}", explanation);
        }
    }

    if let Some(dir) = &config.output.save_dir {
        let storage = LocalStorage::new(dir.clone());
        let today = chrono::Local::now().date_naive();
        match save_summary(&storage, &result, today).await {
            Ok(filename) => eprintln!("📁 Summary saved to: {}/{}", dir, filename),
            Err(e) => exit_with(&e),
        }
    }

    Ok(())
}
