// src/simulation/csv.rs

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::fleet::DroneSnapshot;
use crate::simulation::log::{LogEntry, SimulationLog};

/// 配送ログのCSVヘッダー
pub const LOG_HEADER: &str =
    "drone_id,delivery_id,status,reason,timestamp,delivery_lat,delivery_lon,assigned_hub,payload_kg";
/// ドローン稼働状況のCSVヘッダー
pub const FLEET_HEADER: &str = "id,hub,deliveries_completed,battery,status";

/// CSV出力先の準備（親ディレクトリがなければ作る）
pub fn setup_csv_output<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>, std::io::Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}

/// 配送ログをCSVで書き出す
pub fn write_log_csv<W: Write>(writer: &mut W, log: &SimulationLog) -> Result<(), std::io::Error> {
    writeln!(writer, "{}", LOG_HEADER)?;
    for entry in log {
        writer.write_all(create_log_row(entry).as_bytes())?;
    }
    writer.flush()
}

/// ドローンの最終状態をCSVで書き出す
pub fn write_fleet_csv<W: Write>(
    writer: &mut W,
    snapshot: &[DroneSnapshot],
) -> Result<(), std::io::Error> {
    writeln!(writer, "{}", FLEET_HEADER)?;
    for drone in snapshot {
        writeln!(
            writer,
            "{},{},{},{},{}",
            escape(&drone.id),
            escape(drone.hub.as_str()),
            drone.deliveries_completed,
            drone.battery,
            drone.status
        )?;
    }
    writer.flush()
}

/// 配送ログのCSV行の作成（理由がない場合は空欄）
pub fn create_log_row(entry: &LogEntry) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{}\n",
        escape(entry.drone_label()),
        escape(&entry.delivery_id),
        entry.status,
        entry.reason.map(|r| r.as_str()).unwrap_or(""),
        entry.timestamp.to_rfc3339(),
        entry.delivery_lat,
        entry.delivery_lon,
        escape(entry.assigned_hub.as_str()),
        entry.payload_kg
    )
}

/// カンマ・引用符・改行を含むフィールドを引用符で囲む
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
