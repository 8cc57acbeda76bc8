use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rattendance::core::calculator::{
    OvertimeRules, compute_lateness, compute_overtime, resolve_schedule,
};
use rattendance::core::{Core, aggregate};
use rattendance::ingest::{InputFormat, read_records};
use rattendance::models::{AttendanceRecord, EmployeeMeta, RawValue, RowStatus};
use rattendance::utils::normalize_date;
use rust_xlsxwriter::{Format, Workbook};

const SHIFT: &str = "08:00-17:00 / 08:00-16:00";
const MONDAY: &str = "06-01-2025";

fn t(s: &str) -> RawValue {
    RawValue::text(s)
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn record(name: &str, date: &str, ci: &str, co: &str, remark: &str) -> AttendanceRecord {
    AttendanceRecord {
        employee: EmployeeMeta {
            name: name.into(),
            shift: SHIFT.into(),
            ..Default::default()
        },
        date: t(date),
        check_in: t(ci),
        check_out: t(co),
        remark: remark.into(),
    }
}

#[test]
fn test_dates_round_trip_in_both_styles() {
    let mut day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    while day.year() == 2024 {
        let dashed = t(&day.format("%d-%m-%Y").to_string());
        let slashed = t(&day.format("%d/%m/%Y").to_string());
        assert_eq!(normalize_date(&dashed), Some(day));
        assert_eq!(normalize_date(&slashed), Some(day));
        day = day.succ_opt().unwrap();
    }

    for bad in ["", "none", "31-02-2025", "2025-01-06x", "06.01.2025", "-"] {
        assert_eq!(normalize_date(&t(bad)), None, "{bad}");
    }
}

#[test]
fn test_schedule_by_weekday() {
    let mon_thu = resolve_schedule(SHIFT, Weekday::Wed).unwrap();
    assert_eq!((mon_thu.start, mon_thu.end), (hm(8, 0), hm(17, 0)));

    let friday = resolve_schedule(SHIFT, Weekday::Fri).unwrap();
    assert_eq!((friday.start, friday.end), (hm(8, 0), hm(16, 0)));

    assert!(resolve_schedule(SHIFT, Weekday::Sat).is_none());
    assert!(resolve_schedule(SHIFT, Weekday::Sun).is_none());
}

#[test]
fn test_lateness_properties() {
    assert_eq!(compute_lateness(&t("08:15:00"), &t(MONDAY), "08:00-17:00"), 15);
    assert_eq!(compute_lateness(&t("08:00:00"), &t(MONDAY), "08:00-17:00"), 0);
    assert_eq!(compute_lateness(&t("07:30:00"), &t(MONDAY), "08:00-17:00"), 0);
    assert_eq!(compute_lateness(&t("-"), &t(MONDAY), "08:00-17:00"), 0);
}

#[test]
fn test_overtime_properties() {
    let rules = OvertimeRules::default();
    let ot = |ci: &str, co: &str, remark: &str| {
        compute_overtime(&t(ci), &t(co), &t(MONDAY), "08:00-17:00", remark, &rules)
    };

    let early = ot("06:00:00", "17:00:00", "");
    assert_eq!((early.tier_a_hours, early.tier_b_hours), (2.0, 0.0));

    let late = ot("08:00:00", "22:30:00", "");
    assert_eq!((late.tier_a_hours, late.tier_b_hours), (1.5, 4.0));

    for remark in ["Ausente", "dia LIBRE"] {
        let none = ot("06:00:00", "23:00:00", remark);
        assert_eq!((none.tier_a_hours, none.tier_b_hours), (0.0, 0.0));
    }

    // arriving after the shift ended: only the time present is credited
    let evening = ot("19:00:00", "20:00:00", "");
    assert_eq!((evening.tier_a_hours, evening.tier_b_hours), (0.0, 1.0));
    let night = ot("23:00:00", "02:00:00", "");
    assert!(night.total_hours() <= 3.0);
    assert_eq!((night.tier_a_hours, night.tier_b_hours), (3.0, 0.0));

    // 30 minutes is not credited, 31 is
    assert_eq!(ot("08:00:00", "17:30:00", "").tier_b_hours, 0.0);
    assert!(ot("08:00:00", "17:31:00", "").tier_b_hours > 0.0);
}

#[test]
fn test_aggregate_sums_and_drops() {
    let rules = OvertimeRules::default();
    let records = vec![
        record("Ana", MONDAY, "08:15:00", "22:30:00", ""),
        record("Ana", "07-01-2025", "08:20:00", "17:00:00", ""),
        record("Ana", "xx", "08:20:00", "17:00:00", ""),
        record("Ana", "08-01-2025", "-", "-", "Ausente"),
        record("Ana", "09-01-2025", "06:30:00", "-", "Falta Salida"),
    ];

    let report = aggregate(&records, &rules);
    assert_eq!(report.detail.len(), 4);
    assert_eq!(report.dropped, 1);
    assert_eq!(report.summary.len(), 1);

    let sum_late: i64 = report.detail.iter().map(|r| r.late_minutes).sum();
    let sum_a: f64 = report.detail.iter().map(|r| r.overtime.tier_a_hours).sum();
    let sum_b: f64 = report.detail.iter().map(|r| r.overtime.tier_b_hours).sum();

    let ana = &report.summary[0];
    assert_eq!(ana.total_late_minutes, sum_late);
    assert_eq!(ana.total_late_minutes, 35);
    assert_eq!(ana.total_tier_a_hours, sum_a);
    assert_eq!(ana.total_tier_b_hours, sum_b);

    assert_eq!(report.detail[2].status, RowStatus::Absent);
    assert_eq!(report.detail[3].status, RowStatus::MissingPunch);

    // no hidden state between calls
    assert_eq!(aggregate(&records, &rules), report);
}

#[test]
fn test_unreadable_input_is_an_error() {
    let records = vec![record("Ana", "fecha", "08:00", "17:00", "")];
    assert!(Core::build_report(&records, &OvertimeRules::default()).is_err());
}

#[test]
fn test_real_workbook_is_ingested() {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    let date_fmt = Format::new().set_num_format("dd-mm-yyyy");
    let time_fmt = Format::new().set_num_format("hh:mm:ss");

    ws.write(0, 0, "Reporte de Asistencia").unwrap();
    ws.write(1, 0, "Funcionario").unwrap();
    ws.write(1, 1, ": Ana Pérez").unwrap();
    ws.write(2, 0, "Rut").unwrap();
    ws.write(2, 1, ": 11.111.111-1").unwrap();
    ws.write(3, 0, "Turno").unwrap();
    ws.write(3, 1, ": 08:00-17:00").unwrap();
    ws.write(5, 0, "Dia").unwrap();
    ws.write(6, 0, "Lunes").unwrap();
    // 06-01-2025, 08:15:00, 22:30:00 as native Excel values
    ws.write_with_format(6, 1, 45663.0, &date_fmt).unwrap();
    ws.write_with_format(6, 2, 0.34375, &time_fmt).unwrap();
    ws.write_with_format(6, 3, 0.9375, &time_fmt).unwrap();
    ws.write(7, 0, "Martes").unwrap();
    ws.write(7, 1, "07-01-2025").unwrap();
    ws.write(7, 2, "-").unwrap();
    ws.write(7, 3, "-").unwrap();
    ws.write(7, 5, "Ausente").unwrap();
    let bytes = wb.save_to_buffer().unwrap();

    let ingested = read_records(bytes, "test.xlsx").unwrap();
    assert_eq!(ingested.format, InputFormat::Workbook);
    assert_eq!(ingested.records.len(), 2);
    assert_eq!(ingested.records[0].employee.name, "Ana Pérez");
    assert_eq!(ingested.records[1].remark, "Ausente");

    let report = Core::build_report(&ingested.records, &OvertimeRules::default()).unwrap();
    let monday = &report.detail[0];
    assert_eq!(monday.late_minutes, 15);
    assert_eq!(monday.overtime.tier_a_hours, 1.5);
    assert_eq!(monday.overtime.tier_b_hours, 4.0);
}
