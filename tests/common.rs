#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Fresh temp directory for one test
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rattendance_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Config path inside `dir` (the file itself is not created)
pub fn config_in(dir: &std::path::Path) -> String {
    dir.join("rattendance.conf").to_string_lossy().to_string()
}

/// Two employees as exported by the reloj control web UI: an HTML page
/// saved with an `.xls` extension.
///
/// Ana (08:00-17:00 Mon-Thu, 08:00-16:00 Fri):
///   Mon 06-01  08:15 → 22:30  late 15, 25% 4:00, 50% 1:30
///   Tue 07-01  Ausente
///   Wed 08-01  06:00 → 17:00  50% 2:00
///   Thu 09-01  08:00 → -      Falta Salida
/// Luis (08:00-17:00, no Friday window):
///   Fri 10-01  09:00 → 18:00  no schedule, 25% 9:00
///   Sat "s/f"  unreadable date, dropped
pub const HTML_EXPORT: &str = r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>Reporte</title><style>td{}</style></head>
<body>
<table>
  <tr><td>Funcionario</td><td>: Ana P&eacute;rez</td></tr>
  <tr><td>Rut</td><td>: 11.111.111-1</td></tr>
  <tr><td>Organigrama</td><td>: Finanzas</td></tr>
  <tr><td>Turno : 08:00-17:00 / 08:00-16:00</td></tr>
  <tr><td>Periodo</td><td>: Enero 2025</td></tr>
</table>
<table>
  <tr><th>Dia</th><th>Fecha</th><th>Entrada</th><th>Salida</th><th>Horas</th><th>Descripción</th></tr>
  <tr><td>Lunes</td><td>06-01-2025</td><td>08:15:00</td><td>22:30:00</td><td></td><td></td></tr>
  <tr><td>Martes</td><td>07-01-2025</td><td>-</td><td>-</td><td></td><td>Ausente</td></tr>
  <tr><td>Miércoles</td><td>08-01-2025</td><td>06:00:00</td><td>17:00:00</td><td></td><td></td></tr>
  <tr><td>Jueves</td><td>09-01-2025</td><td>08:00:00</td><td>-</td><td></td><td>Falta Salida</td></tr>
  <tr><td>Totales</td><td></td><td></td><td></td><td></td><td></td></tr>
</table>
<table>
  <tr><td>Funcionario</td><td>: Luis Soto</td></tr>
  <tr><td>Rut</td><td>: 22.222.222-2</td></tr>
  <tr><td>Turno</td><td>: 08:00-17:00</td></tr>
</table>
<table>
  <tr><th>Dia</th><th>Fecha</th><th>Entrada</th><th>Salida</th><th>Horas</th><th>Descripción</th></tr>
  <tr><td>Viernes</td><td>10-01-2025</td><td>09:00:00</td><td>18:00:00</td><td></td><td></td></tr>
  <tr><td>Sábado</td><td>s/f</td><td>09:00:00</td><td>18:00:00</td><td></td><td></td></tr>
</table>
</body></html>
"#;

/// Write the HTML export into `dir` under `name`
pub fn write_export(dir: &std::path::Path, name: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, HTML_EXPORT).expect("write fixture");
    path.to_string_lossy().to_string()
}
