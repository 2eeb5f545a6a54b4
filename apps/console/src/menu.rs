pub(crate) const MENU: &str = "1: Add animal, 2: Report, 3: Petting zoo, 4: Inventory, 5: Exit";
pub(crate) const MENU_PROMPT: &str = "Enter operation number: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    AddAnimal,
    Report,
    PettingZoo,
    Inventory,
    Exit,
}

impl Command {
    pub(crate) fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddAnimal),
            "2" => Some(Self::Report),
            "3" => Some(Self::PettingZoo),
            "4" => Some(Self::Inventory),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}
