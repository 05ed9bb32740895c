// Console commands. One command per line, parsed without side effects.

use crate::modules::catalog::core::draft::DraftField;
use thiserror::Error;

pub const HELP: &str = "\
Comandos:
  list            recarrega a lista
  name <texto>    define o nome
  price <texto>   define o preço
  sku <texto>     define o SKU
  submit          cadastra ou atualiza
  edit <n>        edita o produto n
  cancel          cancela a edição
  delete <n>      exclui o produto n
  help            mostra esta ajuda
  quit            sai
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    List,
    Set(DraftField, String),
    Submit,
    Edit(usize),
    Cancel,
    Delete(usize),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Comando desconhecido: {0}. Digite help para ver os comandos.")]
    Unknown(String),

    #[error("Informe o número do produto: {0} <n>")]
    MissingRow(&'static str),

    #[error("Número de produto inválido: {0}")]
    InvalidRow(String),

    #[error("Produto {0} não está na lista")]
    NoSuchRow(usize),
}

fn row(command: &'static str, argument: &str) -> Result<usize, CommandError> {
    if argument.is_empty() {
        return Err(CommandError::MissingRow(command));
    }
    match argument.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(CommandError::InvalidRow(argument.to_string())),
    }
}

pub fn parse_command(line: &str) -> Result<ConsoleCommand, CommandError> {
    let line = line.trim();
    let (word, argument) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "list" | "ls" => Ok(ConsoleCommand::List),
        "name" => Ok(ConsoleCommand::Set(DraftField::Name, argument.to_string())),
        "price" => Ok(ConsoleCommand::Set(DraftField::Price, argument.to_string())),
        "sku" => Ok(ConsoleCommand::Set(DraftField::Sku, argument.to_string())),
        "submit" => Ok(ConsoleCommand::Submit),
        "edit" => row("edit", argument).map(ConsoleCommand::Edit),
        "cancel" => Ok(ConsoleCommand::Cancel),
        "delete" | "rm" => row("delete", argument).map(ConsoleCommand::Delete),
        "help" | "?" => Ok(ConsoleCommand::Help),
        "quit" | "exit" => Ok(ConsoleCommand::Quit),
        _ => Err(CommandError::Unknown(word.to_string())),
    }
}
