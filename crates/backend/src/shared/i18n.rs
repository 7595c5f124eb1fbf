use std::collections::BTreeMap;

use contracts::enums::Lang;
use once_cell::sync::Lazy;

use crate::shared::error::AppError;

type Table = BTreeMap<&'static str, &'static str>;

static EN: Lazy<Table> = Lazy::new(|| {
    BTreeMap::from([
        ("title", "Production Order Tracker"),
        (
            "subtitle",
            "Track production orders and update their status in real time",
        ),
        ("toggle_dark", "Toggle Dark Mode"),
        ("add_order", "Add New Order"),
        ("item_name", "Item Name"),
        ("quantity", "Quantity"),
        ("status", "Status"),
        ("created", "Created"),
        ("actions", "Actions"),
        ("add", "Add"),
        ("search", "Search item..."),
        ("order_list", "Order List"),
        ("delete_confirm", "Are you sure you want to delete this order?"),
        ("yes_delete", "Yes, Delete"),
        ("cancel", "Cancel"),
        ("success", "Order added successfully!"),
        ("previous", "Previous"),
        ("next", "Next"),
        ("order_by", "Order By"),
        ("date_newest", "Date (Newest)"),
        ("date_oldest", "Date (Oldest)"),
        ("quantity_asc", "Quantity (Low → High)"),
        ("quantity_desc", "Quantity (High → Low)"),
        ("status_asc", "Status (A → Z)"),
        ("status_desc", "Status (Z → A)"),
        ("dashboard", "Dashboard"),
        ("total_orders", "Total Orders"),
        ("pending_orders", "Pending Orders"),
        ("completed_orders", "Completed Orders"),
        ("most_frequent_item", "Most Frequent Item"),
        ("no_orders", "No orders yet"),
    ])
});

static DE: Lazy<Table> = Lazy::new(|| {
    BTreeMap::from([
        ("title", "Produktionsauftrag Verfolgung"),
        (
            "subtitle",
            "Verfolgen Sie Produktionsaufträge und aktualisieren Sie deren Status in Echtzeit",
        ),
        ("toggle_dark", "Dunkelmodus umschalten"),
        ("add_order", "Neuen Auftrag hinzufügen"),
        ("item_name", "Artikelname"),
        ("quantity", "Menge"),
        ("status", "Status"),
        ("created", "Erstellt"),
        ("actions", "Aktionen"),
        ("add", "Hinzufügen"),
        ("search", "Artikel suchen..."),
        ("order_list", "Auftragsliste"),
        ("delete_confirm", "Möchten Sie diesen Auftrag wirklich löschen?"),
        ("yes_delete", "Ja, löschen"),
        ("cancel", "Abbrechen"),
        ("success", "Auftrag erfolgreich hinzugefügt!"),
        ("previous", "Zurück"),
        ("next", "Weiter"),
        ("order_by", "Sortieren nach"),
        ("date_newest", "Datum (neueste)"),
        ("date_oldest", "Datum (älteste)"),
        ("quantity_asc", "Menge (aufsteigend)"),
        ("quantity_desc", "Menge (absteigend)"),
        ("status_asc", "Status (A → Z)"),
        ("status_desc", "Status (Z → A)"),
        ("dashboard", "Übersicht"),
        ("total_orders", "Aufträge gesamt"),
        ("pending_orders", "Ausstehende Aufträge"),
        ("completed_orders", "Abgeschlossene Aufträge"),
        ("most_frequent_item", "Häufigster Artikel"),
        ("no_orders", "Noch keine Aufträge"),
    ])
});

// Status labels are keyed by the stored status value, not by a UI key
static EN_STATUS: Lazy<Table> = Lazy::new(|| {
    BTreeMap::from([
        ("Pending", "Pending"),
        ("In Progress", "In Progress"),
        ("Completed", "Completed"),
    ])
});

static DE_STATUS: Lazy<Table> = Lazy::new(|| {
    BTreeMap::from([
        ("Pending", "Ausstehend"),
        ("In Progress", "In Bearbeitung"),
        ("Completed", "Abgeschlossen"),
    ])
});

pub fn pack(lang: Lang) -> &'static Table {
    match lang {
        Lang::En => &EN,
        Lang::De => &DE,
    }
}

pub fn status_labels(lang: Lang) -> &'static Table {
    match lang {
        Lang::En => &EN_STATUS,
        Lang::De => &DE_STATUS,
    }
}

/// Look up one display string. A missing key is a loud failure, never a
/// silent blank.
pub fn translate(lang: Lang, key: &str) -> Result<&'static str, AppError> {
    pack(lang)
        .get(key)
        .copied()
        .ok_or_else(|| AppError::MissingTranslation {
            lang: lang.code(),
            key: key.to_string(),
        })
}

/// Owned copy of the whole table, for render payloads.
pub fn pack_owned(lang: Lang) -> BTreeMap<String, String> {
    to_owned_table(pack(lang))
}

/// Owned copy of the status sub-table, for render payloads.
pub fn status_labels_owned(lang: Lang) -> BTreeMap<String, String> {
    to_owned_table(status_labels(lang))
}

fn to_owned_table(table: &Table) -> BTreeMap<String, String> {
    table
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages_carry_the_same_keys() {
        let en_keys: Vec<_> = EN.keys().collect();
        let de_keys: Vec<_> = DE.keys().collect();
        assert_eq!(en_keys, de_keys);

        let en_status_keys: Vec<_> = EN_STATUS.keys().collect();
        let de_status_keys: Vec<_> = DE_STATUS.keys().collect();
        assert_eq!(en_status_keys, de_status_keys);
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate(Lang::En, "title").unwrap(), "Production Order Tracker");
        assert_eq!(translate(Lang::De, "add").unwrap(), "Hinzufügen");
        assert!(matches!(
            translate(Lang::De, "does_not_exist"),
            Err(AppError::MissingTranslation { lang: "de", .. })
        ));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_labels(Lang::De).get("Pending"), Some(&"Ausstehend"));
        assert_eq!(
            status_labels(Lang::En).get("Completed"),
            Some(&"Completed")
        );
        // Free-text statuses written by the update operation have no label
        assert_eq!(status_labels(Lang::En).get("Shipped"), None);
    }
}
