use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::cli::Args;
use crate::config::Config;
use crate::error::{Result, TransError};
use crate::input::InputReader;
use crate::status;
use crate::translation::{LanguagePair, TranslationClient, is_valid_pair, resolve};
use crate::ui::{Spinner, Style};

/// What a single invocation translates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// `-e`: Chinese to English.
    ToEnglish(String),
    /// `-z`: English to Simplified Chinese.
    ToChinese(String),
    /// `-c`: inline text with the resolved pair.
    Custom(String),
    /// `-f`: whole file content with the resolved pair.
    File(PathBuf),
    /// No text flag: every stdin line with the resolved pair.
    Interactive,
}

impl Mode {
    /// Picks the mode from the text flags.
    ///
    /// Priority is `-e`, `-z`, `-c`, `-f`; empty values count as absent.
    pub fn select(args: &Args) -> Self {
        let non_empty = |value: Option<&str>| value.filter(|v| !v.is_empty()).map(str::to_string);

        if let Some(text) = non_empty(args.en.as_deref()) {
            Self::ToEnglish(text)
        } else if let Some(text) = non_empty(args.zh.as_deref()) {
            Self::ToChinese(text)
        } else if let Some(text) = non_empty(args.custom.as_deref()) {
            Self::Custom(text)
        } else if let Some(path) = args.file.clone().filter(|p| !p.as_os_str().is_empty()) {
            Self::File(path)
        } else {
            Self::Interactive
        }
    }
}

pub struct TranslateOptions {
    pub mode: Mode,
    /// Raw `-l` value.
    pub lang: Option<String>,
}

impl TranslateOptions {
    pub fn from_args(args: &Args) -> Self {
        Self {
            mode: Mode::select(args),
            lang: args.lang.clone(),
        }
    }
}

/// Runs one invocation, printing each translation to `output`.
///
/// Stops at the first failure; remaining input lines are not read.
pub async fn run_translate<R, W>(
    options: &TranslateOptions,
    config: &Config,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let client = TranslationClient::new(config.api()?);
    debug!(mode = ?options.mode, endpoint = client.endpoint(), "dispatching");

    match &options.mode {
        Mode::ToEnglish(text) => {
            translate_one(&client, text, &LanguagePair::to_english(), output).await
        }
        Mode::ToChinese(text) => {
            translate_one(&client, text, &LanguagePair::to_chinese(), output).await
        }
        Mode::Custom(text) => {
            let pair = resolve_pair(options.lang.as_deref(), config);
            translate_one(&client, text, &pair, output).await
        }
        Mode::File(path) => {
            let pair = resolve_pair(options.lang.as_deref(), config);
            let text = InputReader::read_file(path)?;
            translate_one(&client, &text, &pair, output).await
        }
        Mode::Interactive => {
            let pair = resolve_pair(options.lang.as_deref(), config);
            for line in InputReader::lines(input) {
                translate_one(&client, &line?, &pair, output).await?;
            }
            Ok(())
        }
    }
}

/// Resolves `-l`, telling the user when a malformed value is ignored.
fn resolve_pair(lang: Option<&str>, config: &Config) -> LanguagePair {
    if let Some(spec) = lang
        && !spec.is_empty()
        && !is_valid_pair(spec)
    {
        status!(
            "{} {}",
            Style::warning("语言代码格式无效:"),
            Style::hint(format!(
                "'{spec}', 使用配置文件中的默认语言 (示例: -l EN:ZH, 注意语言代码要大写)"
            ))
        );
    }

    let pair = resolve(lang, config);
    debug!(source_lang = %pair.source, target_lang = %pair.target, "resolved language pair");
    pair
}

async fn translate_one<W: Write>(
    client: &TranslationClient,
    text: &str,
    pair: &LanguagePair,
    output: &mut W,
) -> Result<()> {
    let spinner = Spinner::new("翻译中...");
    let response = client.translate(text, pair).await;
    spinner.stop();

    let response = response?;
    writeln!(output, "{}", response.data).map_err(TransError::Output)?;
    output.flush().map_err(TransError::Output)
}
