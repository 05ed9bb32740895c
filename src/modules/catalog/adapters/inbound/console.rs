// Line oriented console front end for the catalog controller.
//
// Responsibilities
// - Read commands, dispatch them to the controller, print the view after each one.
// - Act as the Prompter: confirmations are read from the same input, notices printed.

use crate::modules::catalog::adapters::inbound::command::{
    CommandError, ConsoleCommand, HELP, parse_command,
};
use crate::modules::catalog::controller::CatalogController;
use crate::modules::catalog::core::view::{CatalogView, ListBody};
use crate::modules::catalog::ports::{Prompter, ProductStore};
use async_trait::async_trait;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stdin, Stdout,
};
use tokio::sync::Mutex;
use tracing::warn;

pub struct ConsoleIo<R, W> {
    input: Mutex<Lines<R>>,
    output: Mutex<W>,
}

pub type StdConsole = ConsoleIo<BufReader<Stdin>, Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> ConsoleIo<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input.lines()),
            output: Mutex::new(output),
        }
    }

    /// Next input line, None at end of input.
    pub async fn read_line(&self) -> std::io::Result<Option<String>> {
        self.input.lock().await.next_line().await
    }

    pub async fn write(&self, text: &str) -> std::io::Result<()> {
        let mut output = self.output.lock().await;
        output.write_all(text.as_bytes()).await?;
        output.flush().await
    }
}

impl<R, W> ConsoleIo<R, W>
where
    W: AsRef<[u8]>,
{
    pub async fn written(&self) -> String {
        String::from_utf8_lossy(self.output.lock().await.as_ref()).into_owned()
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}

#[async_trait]
impl<R, W> Prompter for ConsoleIo<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn confirm(&self, question: &str) -> bool {
        if let Err(error) = self.write(&format!("{question} [s/N] ")).await {
            warn!(%error, "writing confirmation failed");
            return false;
        }
        match self.read_line().await {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(error) => {
                warn!(%error, "reading confirmation failed");
                false
            }
        }
    }

    async fn notify(&self, message: &str) {
        if let Err(error) = self.write(&format!("{message}\n")).await {
            warn!(%error, "writing notice failed");
        }
    }
}

pub fn render(view: &CatalogView) -> String {
    let mut lines = vec![
        format!("== {} ==", view.form_title),
        format!("Nome:  {}", view.draft.name),
        format!("Preço: {}", view.draft.price),
        format!("SKU:   {}", view.draft.sku),
    ];
    if view.show_cancel {
        lines.push(format!("[{}] [Cancelar]", view.submit_label));
    } else {
        lines.push(format!("[{}]", view.submit_label));
    }
    if let Some(error) = &view.error {
        lines.push(format!("! {error}"));
    }

    lines.push(format!("-- Produtos ({}) --", view.count_label));
    match &view.body {
        ListBody::Loading => lines.push("Carregando...".to_string()),
        ListBody::Empty { message, hint } => {
            lines.push(message.to_string());
            lines.push(hint.to_string());
        }
        ListBody::Rows(rows) => lines.extend(rows.iter().map(|row| {
            format!(
                "{:>3}. {} | {} | {} | letra: {}",
                row.position, row.name, row.price, row.sku, row.missing_letter
            )
        })),
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    ShowHelp,
    Quit,
}

pub async fn dispatch<TStore, TPrompter>(
    controller: &mut CatalogController<TStore, TPrompter>,
    command: ConsoleCommand,
) -> Result<Flow, CommandError>
where
    TStore: ProductStore + 'static,
    TPrompter: Prompter + 'static,
{
    match command {
        ConsoleCommand::List => {
            controller.load().await;
        }
        ConsoleCommand::Set(field, value) => controller.set_field(field, value),
        ConsoleCommand::Submit => {
            controller.submit().await;
        }
        ConsoleCommand::Edit(position) => {
            if !controller.begin_edit_at(position) {
                return Err(CommandError::NoSuchRow(position));
            }
        }
        ConsoleCommand::Cancel => controller.cancel_edit(),
        ConsoleCommand::Delete(position) => {
            if controller.delete_at(position).await.is_none() {
                return Err(CommandError::NoSuchRow(position));
            }
        }
        ConsoleCommand::Help => return Ok(Flow::ShowHelp),
        ConsoleCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Runs until `quit` or end of input.
pub async fn run<TStore, TPrompter, R, W>(
    controller: &mut CatalogController<TStore, TPrompter>,
    io: &ConsoleIo<R, W>,
) -> std::io::Result<()>
where
    TStore: ProductStore + 'static,
    TPrompter: Prompter + 'static,
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    controller.mount().await;
    io.write(&render(&controller.view())).await?;
    io.write(HELP).await?;

    loop {
        io.write("> ").await?;
        let Some(line) = io.read_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let flow = match parse_command(&line) {
            Ok(command) => dispatch(controller, command).await,
            Err(error) => Err(error),
        };
        match flow {
            Ok(Flow::Quit) => break,
            Ok(Flow::ShowHelp) => io.write(HELP).await?,
            Ok(Flow::Continue) => io.write(&render(&controller.view())).await?,
            Err(error) => io.write(&format!("{error}\n")).await?,
        }
    }
    Ok(())
}
