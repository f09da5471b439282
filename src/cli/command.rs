#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    ManageDictionary,
    Translate,
    SaveAndExit,
    Unknown,
}

impl From<&str> for MainCommand {
    fn from(s: &str) -> Self {
        match s {
            "1" => MainCommand::ManageDictionary,
            "2" => MainCommand::Translate,
            "3" => MainCommand::SaveAndExit,
            _ => MainCommand::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictCommand {
    Add,
    List,
    Update,
    Remove,
    Back,
    Unknown,
}

impl From<&str> for DictCommand {
    fn from(s: &str) -> Self {
        match s {
            "1" => DictCommand::Add,
            "2" => DictCommand::List,
            "3" => DictCommand::Update,
            "4" => DictCommand::Remove,
            "5" => DictCommand::Back,
            _ => DictCommand::Unknown,
        }
    }
}
