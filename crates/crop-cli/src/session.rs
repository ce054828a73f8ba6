//! Interactive question/answer loop

use colored::*;
use std::io::{BufRead, Write};

use crop_core::{AdviceProvider, Conversation, ConversationTurn, Result};

use crate::advisor::CropAdvisor;
use crate::renderer::Renderer;

/// Run the Q&A loop until the user types `exit` or input ends.
///
/// Blank lines re-prompt without calling the provider. Every answered
/// question is returned, including those no longer replayed into prompts.
pub async fn run_session<L, R, W>(
    advisor: &CropAdvisor<L>,
    input: &mut R,
    output: &mut W,
    renderer: &dyn Renderer,
) -> Result<Conversation>
where
    L: AdviceProvider,
    R: BufRead,
    W: Write,
{
    let mut conversation = Conversation::new();

    writeln!(output, "\n{}", "=== Interactive Q&A with LLM ===".bold())?;
    writeln!(
        output,
        "Ask any question about your crops or results (type 'exit' to stop)."
    )?;

    loop {
        write!(output, "\n{} ", "Your question:".green().bold())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "\nUnexpected end of input. Exiting Q&A.")?;
            break;
        }

        let question = line.trim();
        if question.eq_ignore_ascii_case("exit") {
            break;
        }
        if question.is_empty() {
            writeln!(output, "Please enter a question.")?;
            continue;
        }

        let answer = advisor.answer(&conversation, question).await;

        write!(output, "{} ", "Answer:".cyan())?;
        renderer.render(output, &answer)?;

        conversation.push(ConversationTurn::new(question, answer));
    }

    tracing::info!(turns = conversation.len(), "Q&A session finished");
    Ok(conversation)
}
