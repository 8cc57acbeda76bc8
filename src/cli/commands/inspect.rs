use crate::cli::commands::process::load_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Report;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};
use crate::utils::{format_minutes, hours_to_hhmm};

/// Handle the `inspect` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Inspect { file } = cmd {
        let report = load_report(file, cfg)?;

        if report.is_empty() {
            info("No attendance rows found.");
            return Ok(());
        }

        header("Detalle Diario");
        println!("{}", detail_table(&report).render());

        header("Resumen");
        println!("{}", summary_table(&report).render());
    }

    Ok(())
}

fn detail_table(report: &Report) -> Table {
    let mut table = Table::new(vec![
        Column::new("Funcionario", 24),
        Column::new("Fecha", 10),
        Column::new("Entrada", 8),
        Column::new("Salida", 8),
        Column::new("Atraso", 6),
        Column::new("50%", 5),
        Column::new("25%", 5),
        Column::new("Descripción", 20),
    ]);

    for r in &report.detail {
        table.add_row(
            vec![
                truncate(&r.employee.name, 24),
                r.date.to_string(),
                r.check_in.to_string(),
                r.check_out.to_string(),
                r.late_hhmm.clone(),
                r.tier_a_hhmm.clone(),
                r.tier_b_hhmm.clone(),
                truncate(&r.remark, 20),
            ],
            color_for_status(r.status),
        );
    }

    table
}

fn summary_table(report: &Report) -> Table {
    let mut table = Table::new(vec![
        Column::new("Funcionario", 24),
        Column::new("Rut", 12),
        Column::new("Total 50%", 5),
        Column::new("Total 25%", 5),
        Column::new("Total Atraso", 5),
        Column::new("Total Horas", 5),
    ]);

    for s in &report.summary {
        table.add_row(
            vec![
                truncate(&s.employee.name, 24),
                s.employee.id.clone(),
                hours_to_hhmm(s.total_tier_a_hours),
                hours_to_hhmm(s.total_tier_b_hours),
                format_minutes(s.total_late_minutes),
                hours_to_hhmm(s.total_hours()),
            ],
            RESET,
        );
    }

    table
}
