//! Interactive page builder (`pagegen build`).
//!
//! Drives the form loop with dialoguer prompts: page details first, then a
//! menu for adding sections, listing them and generating the page. All state
//! lives in a `Session` value threaded through the handlers.

use anyhow::Result;
use console::style;
use dialoguer::{Input, Select};
use log::error;

use pagegen::app_controller::{Controller, GenerateOutcome};
use pagegen::renderer::PageMeta;
use pagegen::section::ContentType;
use pagegen::session::Session;

/// Line that ends a multi-line field
const INPUT_TERMINATOR: &str = ".";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    AddSection,
    GeneratePage,
    ShowSections,
    Quit,
}

impl MenuAction {
    fn label(&self) -> &'static str {
        match self {
            Self::AddSection => "Add Section",
            Self::GeneratePage => "Generate Page",
            Self::ShowSections => "Show Sections",
            Self::Quit => "Quit",
        }
    }

    // Generating is only offered once something was added
    fn available(session: &Session) -> Vec<MenuAction> {
        let mut actions = vec![Self::AddSection];
        if !session.is_empty() {
            actions.push(Self::GeneratePage);
        }
        actions.push(Self::ShowSections);
        actions.push(Self::Quit);
        actions
    }
}

/// Run the interactive builder until the user quits
pub fn run_builder(controller: &Controller) -> Result<()> {
    println!();
    println!("  {}", style("Next.js Page Generator").bold());
    println!();

    let meta = read_page_meta()?;
    let mut session = Session::new();

    loop {
        let actions = MenuAction::available(&session);
        let labels: Vec<&str> = actions.iter().map(MenuAction::label).collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            MenuAction::AddSection => {
                session = add_section(session)?;
            }
            MenuAction::GeneratePage => {
                // A failed write is reported and the session is kept as is
                match controller.generate(&session, &meta, &mut rand::rng()) {
                    Ok(GenerateOutcome::Written { path, banner_index }) => {
                        println!(
                            "  {} Page generated successfully at {} (banner {})",
                            style("*").green().bold(),
                            path.display(),
                            banner_index
                        );
                    }
                    Ok(GenerateOutcome::Skipped) => {}
                    Err(e) => error!("Failed to generate page: {:#}", e),
                }
            }
            MenuAction::ShowSections => show_sections(&session),
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

fn read_page_meta() -> Result<PageMeta> {
    let page_name: String = Input::new()
        .with_prompt("Enter the module name for the page")
        .allow_empty(true)
        .interact_text()?;
    let header1: String = Input::new()
        .with_prompt("Enter the header1 text")
        .allow_empty(true)
        .interact_text()?;
    let header2: String = Input::new()
        .with_prompt("Enter the header2 text")
        .allow_empty(true)
        .interact_text()?;

    Ok(PageMeta::new(page_name, header1, header2))
}

fn add_section(session: Session) -> Result<Session> {
    let labels: Vec<&str> = ContentType::ALL.iter().map(ContentType::label).collect();
    let current = ContentType::ALL
        .iter()
        .position(|ct| *ct == session.selected_type())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Choose the content type to add")
        .items(&labels)
        .default(current)
        .interact()?;

    let session = session.handle_select_type(ContentType::ALL[selection]);
    let raw = read_raw_input(session.selected_type(), &session.input_key())?;

    let (session, outcome) = session.handle_input(raw).handle_submit_fragment();
    if outcome.appended {
        println!(
            "  {} Section {} added",
            style("+").green().bold(),
            session.len()
        );
    } else {
        println!("  {} Empty input, nothing added", style("-").yellow());
    }

    Ok(session)
}

// Multi-line fields end at the first blank line
fn read_raw_input(content_type: ContentType, key: &str) -> Result<String> {
    let prompt = format!("{} {}", content_type.input_prompt(), style(format!("[{}]", key)).dim());

    if !content_type.is_multiline() {
        let text: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        return Ok(text);
    }

    println!("  {} (finish with a line containing only {})", prompt, INPUT_TERMINATOR);
    collect_until_terminator(|| {
        Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .map_err(Into::into)
    })
}

/// Gather lines until one equals the terminator; blank lines are kept
fn collect_until_terminator<F>(mut next_line: F) -> Result<String>
where
    F: FnMut() -> Result<String>,
{
    let mut lines = Vec::new();
    loop {
        let line = next_line()?;
        if line == INPUT_TERMINATOR {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

fn show_sections(session: &Session) {
    println!();
    println!("  {}", style("Sections Added").bold());
    if session.is_empty() {
        println!("  No sections added yet.");
    }
    for summary in session.summaries() {
        println!("  {}", summary);
    }
    println!();
}
