use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use floodsensor_core::envelope::{Application, Device, Router, Webhook, WebhookDate};
use serde_json::{Map, Value};

const SETTINGS_RESERVED_LEN: usize = 83;
const SCHEDULE_LEN: usize = 64;
const SCHEDULE_SLOTS_OFFSET: usize = 4;
const DAILY_SLOT_LEN: usize = 2;
const MONTHLY_SLOT_LEN: usize = 3;

const ALIVE_MONTHLY: u8 = 0x00;
const ALIVE_INTERVAL: u8 = 0x01;
const ALIVE_DAILY: u8 = 0x02;

fn main() -> Result<(), String> {
    let root = PathBuf::from("tests/golden");

    write_fixture(
        &root,
        "reading",
        reading_payload(),
        WebhookDate::Text("2024-05-01T09:30:00+09:00".to_string()),
    )?;
    write_fixture(
        &root,
        "settings_interval",
        settings_payload(ALIVE_INTERVAL, interval_schedule(3600)),
        WebhookDate::Text("2024-05-01T09:31:00+09:00".to_string()),
    )?;
    write_fixture(
        &root,
        "settings_daily",
        settings_payload(ALIVE_DAILY, daily_schedule(&[(0, 90), (2, 1080)])),
        WebhookDate::Unix(1_714_523_400),
    )?;
    write_fixture(
        &root,
        "settings_monthly",
        settings_payload(ALIVE_MONTHLY, monthly_schedule(&[(0, 5, 30), (3, 15, 765)])),
        WebhookDate::Text("2024-05-01T00:32:00Z".to_string()),
    )?;
    Ok(())
}

fn reading_payload() -> Vec<u8> {
    let mut payload = vec![1u8, 4, 12];
    for value in [1013.25f32, 12.5, 1008.0, -3.75] {
        payload.extend_from_slice(&value.to_le_bytes());
    }
    payload.push(87);
    payload
}

fn settings_payload(alive_mode: u8, schedule: Vec<u8>) -> Vec<u8> {
    let mut payload = Vec::with_capacity(166);
    payload.extend_from_slice(&350i16.to_le_bytes());
    payload.extend_from_slice(&0.5f32.to_le_bytes());
    payload.extend_from_slice(&600i32.to_le_bytes());
    payload.push(alive_mode);
    payload.extend_from_slice(&schedule);
    payload.extend_from_slice(&[0u8; SETTINGS_RESERVED_LEN]);
    payload.extend_from_slice(&[2, 1, 7]);
    payload.extend_from_slice(&[1, 0, 3]);
    payload.push(92);
    payload.push(0);
    payload
}

fn interval_schedule(seconds: i32) -> Vec<u8> {
    let mut schedule = vec![0xffu8; SCHEDULE_LEN];
    schedule[..4].copy_from_slice(&seconds.to_le_bytes());
    schedule
}

fn daily_schedule(slots: &[(usize, i16)]) -> Vec<u8> {
    let mut schedule = vec![0xffu8; SCHEDULE_LEN];
    for &(index, minutes) in slots {
        let start = SCHEDULE_SLOTS_OFFSET + index * DAILY_SLOT_LEN;
        schedule[start..start + DAILY_SLOT_LEN].copy_from_slice(&minutes.to_le_bytes());
    }
    schedule
}

fn monthly_schedule(slots: &[(usize, i8, i16)]) -> Vec<u8> {
    let mut schedule = vec![0xffu8; SCHEDULE_LEN];
    for &(index, day, minutes) in slots {
        let start = SCHEDULE_SLOTS_OFFSET + index * MONTHLY_SLOT_LEN;
        schedule[start] = day as u8;
        schedule[start + 1..start + MONTHLY_SLOT_LEN].copy_from_slice(&minutes.to_le_bytes());
    }
    schedule
}

fn write_fixture(root: &Path, name: &str, payload: Vec<u8>, date: WebhookDate) -> Result<(), String> {
    let sensor_id = format!("fs-{}", name.replace('_', "-"));
    let mut data = Map::new();
    data.insert("data".to_string(), Value::String(STANDARD.encode(&payload)));

    let webhook = Webhook {
        application: Application {
            application_id: "app-flood-01".to_string(),
            name: "flood-monitoring".to_string(),
        },
        router: Router {
            router_id: "rt-0007".to_string(),
            imsi: "440103000000001".to_string(),
            rssi: -71,
            battery: 100,
            fw_version: "1.2.0".to_string(),
        },
        device: Device {
            device_id: "dev-0042".to_string(),
            sensor_id: sensor_id.clone(),
            sensor_name: "river gauge".to_string(),
            rssi: -83,
            data,
        },
        uplink_id: format!("uplink-{sensor_id}"),
        date: Some(date),
    };

    let dir = root.join(name);
    fs::create_dir_all(&dir).map_err(|e| format!("failed to create {}: {e}", dir.display()))?;
    let mut json = serde_json::to_string_pretty(&webhook).map_err(|e| e.to_string())?;
    json.push('\n');
    let path = dir.join("webhook.json");
    fs::write(&path, json).map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    Ok(())
}
