use zoo::domain::animal::Animal;
use zoo::domain::inventory::Inventory;
use zoo::domain::item::Item;

fn number(entity: &impl Inventory) -> String {
    entity.identifier().map_or_else(|| "-".to_owned(), |id| id.to_string())
}

/// `Kind - Name - #id`
pub(crate) fn animal_line(animal: &Animal) -> String {
    format!("{} - {} - #{}", animal.kind(), animal.name(), number(animal))
}

/// `Name - inv. #id`
pub(crate) fn item_line(item: &Item) -> String {
    format!("{} - inv. #{}", item.name(), number(item))
}
