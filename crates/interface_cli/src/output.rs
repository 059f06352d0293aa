//! Schedule rendering

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::Table;

use domain_schedule::PaymentSchedule;

use crate::config::OutputFormat;

/// Renders a schedule in the requested format
pub fn render(format: OutputFormat, schedule: &PaymentSchedule) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(schedule)?),
        OutputFormat::Table => Ok(render_table(schedule)),
    }
}

/// One row per charge: sequence number, date, amount in major units, currency
pub fn render_table(schedule: &PaymentSchedule) -> String {
    let mut builder = Builder::default();
    builder.push_record(["#", "DATE", "AMOUNT", "CURRENCY"]);

    for (i, payment) in schedule.iter().enumerate() {
        builder.push_record([
            (i + 1).to_string(),
            payment.date.format("%Y-%m-%d").to_string(),
            payment.amount().to_major().to_string(),
            payment.currency.to_string(),
        ]);
    }

    let mut table = Table::from(builder);
    table.with(Style::psql());
    table.modify(Columns::single(2), Alignment::right());
    table.to_string()
}
