use anyhow::Context;

use crate::models::{ClientRecord, MessageTemplate, RenderedClientMessage};

/// Reads client rows from an uploaded CSV. Columns are found by header name
/// (`name`, `phone`, `slot`, any case); rows missing cells fall back to the
/// record defaults instead of failing.
pub fn parse_client_csv(data: &[u8]) -> anyhow::Result<Vec<ClientRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let headers = reader
        .headers()
        .context("failed to read CSV header row")?
        .clone();
    let column = |wanted: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(wanted))
    };
    let (name_col, phone_col, slot_col) = (column("name"), column("phone"), column("slot"));

    if name_col.is_none() && phone_col.is_none() && slot_col.is_none() {
        tracing::warn!("client CSV has none of the name/phone/slot columns, using defaults");
    }

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("failed to read CSV row {}", index + 1))?;
        let cell = |col: Option<usize>| col.and_then(|c| row.get(c));
        records.push(ClientRecord::from_fields(
            cell(name_col),
            cell(phone_col),
            cell(slot_col),
        ));
    }

    Ok(records)
}

/// One confirm/reminder pair per record, in input order.
pub fn render(
    records: &[ClientRecord],
    confirm: &MessageTemplate,
    reminder: &MessageTemplate,
) -> Vec<RenderedClientMessage> {
    records
        .iter()
        .map(|record| {
            let values = [("name", record.name.as_str()), ("slot", record.slot.as_str())];
            RenderedClientMessage {
                name: record.name.clone(),
                phone: record.phone.clone(),
                slot: record.slot.clone(),
                confirm_message: confirm.render(&values),
                reminder_message: reminder.render(&values),
            }
        })
        .collect()
}
