// Interactive translation shell: line prompts on stdin, translated
// sentences on stdout. Log output goes to stderr so the prompt stream
// stays clean.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

use crate::translator::SentenceTranslator;

const ESCAPE: char = '\x1b';

/// Run the prompt/translate/print loop until the user declines another
/// sentence or stdin closes.
pub async fn run_interactive(translator: &SentenceTranslator) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Welcome to the Igpay Atinlay Translator!");

    loop {
        println!("Please enter a sentence to translate");

        let translated = loop {
            let Some(line) = read_sentence(&mut lines).await? else {
                debug!("stdin closed, leaving interactive loop");
                return Ok(());
            };

            match translator.translate_sentence(&line) {
                Ok(output) => break output,
                Err(error) => {
                    debug!(%error, "sentence rejected");
                    println!("Invalid input, please re-enter");
                }
            }
        };

        println!("{translated}");

        match prompt_yes_no(&mut lines, true, "Would you like to translate another sentence?")
            .await?
        {
            Some(true) => continue,
            // "no", escape, or EOF all end the session
            Some(false) | None => return Ok(()),
        }
    }
}

/// Read one input line trimmed of surrounding whitespace; `None` on EOF
async fn read_sentence(lines: &mut Lines<BufReader<Stdin>>) -> Result<Option<String>> {
    match lines.next_line().await? {
        Some(line) => Ok(Some(line.trim().to_string())),
        None => Ok(None),
    }
}

/// Line-based yes/no prompt: the first character of the answer decides.
/// Unrecognized answers re-prompt; `None` means stdin closed.
async fn prompt_yes_no(
    lines: &mut Lines<BufReader<Stdin>>,
    allow_escape: bool,
    message: &str,
) -> Result<Option<bool>> {
    loop {
        println!("{message} [Y/N]");

        let Some(line) = lines.next_line().await? else {
            return Ok(None);
        };

        if let Some(answer) = parse_answer(&line, allow_escape) {
            return Ok(Some(answer));
        }
    }
}

/// Interpret the first character of a prompt answer: `Y`/`y` yes, `N`/`n`
/// no, ESC counts as no when escape is allowed
fn parse_answer(line: &str, allow_escape: bool) -> Option<bool> {
    match line.trim().chars().next() {
        Some('y' | 'Y') => Some(true),
        Some('n' | 'N') => Some(false),
        Some(ESCAPE) if allow_escape => Some(false),
        _ => None,
    }
}
