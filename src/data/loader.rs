//! Asset loading: the volcano table and the background image
//!
//! The table is read synchronously with the `csv` crate; rows whose
//! coordinates cannot be parsed are dropped without being reported. The image
//! is decoded on a background thread and handed over through a channel so
//! the first frames can render before it arrives.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::thread;

use crossbeam_channel::{Receiver, TryRecvError};

use crate::{
    data::{
        parse::parse_number,
        record::{Dataset, VolcanoRecord},
    },
    Result, VolcanoError,
};

pub const COL_LATITUDE: &str = "Latitude";
pub const COL_LONGITUDE: &str = "Longitude";
pub const COL_ELEVATION: &str = "Elevation (m)";
pub const COL_NAME: &str = "Volcano Name";
pub const COL_COUNTRY: &str = "Country";
pub const COL_TYPE: &str = "Type";
pub const COL_TYPE_CATEGORY: &str = "TypeCategory";
pub const COL_STATUS: &str = "Status";
pub const COL_LAST_ERUPTION: &str = "Last Known Eruption";

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    latitude: usize,
    longitude: usize,
    elevation: Option<usize>,
    name: Option<usize>,
    country: Option<usize>,
    kind: Option<usize>,
    type_category: Option<usize>,
    status: Option<usize>,
    last_eruption: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require =
            |name: &str| find(name).ok_or_else(|| VolcanoError::MissingColumn(name.to_string()));

        Ok(Self {
            latitude: require(COL_LATITUDE)?,
            longitude: require(COL_LONGITUDE)?,
            elevation: find(COL_ELEVATION),
            name: find(COL_NAME),
            country: find(COL_COUNTRY),
            kind: find(COL_TYPE),
            type_category: find(COL_TYPE_CATEGORY),
            status: find(COL_STATUS),
            last_eruption: find(COL_LAST_ERUPTION),
        })
    }
}

fn cell<'a>(row: &'a csv::StringRecord, index: Option<usize>) -> &'a str {
    index.and_then(|i| row.get(i)).unwrap_or("")
}

fn text(row: &csv::StringRecord, index: Option<usize>) -> String {
    cell(row, index).trim().to_string()
}

/// Converts one raw row, or `None` when latitude or longitude is unusable.
fn normalize_row(row: &csv::StringRecord, columns: &ColumnIndex) -> Option<VolcanoRecord> {
    let latitude = parse_number(cell(row, Some(columns.latitude)))?;
    let longitude = parse_number(cell(row, Some(columns.longitude)))?;

    Some(VolcanoRecord {
        latitude,
        longitude,
        elevation: parse_number(cell(row, columns.elevation)),
        name: text(row, columns.name),
        country: text(row, columns.country),
        kind: text(row, columns.kind),
        type_category: text(row, columns.type_category),
        status: text(row, columns.status),
        last_eruption: text(row, columns.last_eruption),
    })
}

/// Reads a headed table from any reader.
///
/// Fails when the data cannot be read, when the coordinate columns are
/// missing, or when no row survives normalization.
pub fn load_table_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnIndex::from_headers(csv_reader.headers()?)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in csv_reader.records() {
        match row {
            Ok(row) => match normalize_row(&row, &columns) {
                Some(record) => records.push(record),
                None => dropped += 1,
            },
            Err(e) => {
                log::debug!("Skipping unreadable row: {}", e);
                dropped += 1;
            }
        }
    }

    if records.is_empty() {
        return Err(VolcanoError::NoValidRows);
    }

    log::info!("Loaded {} volcanoes ({} rows dropped)", records.len(), dropped);
    Ok(Dataset::new(records))
}

pub fn load_table(path: impl AsRef<Path>) -> Result<Dataset> {
    let file = File::open(path.as_ref())?;
    load_table_from_reader(file)
}

/// Decoded RGBA8 pixels of the background image
#[derive(Debug, Clone, PartialEq)]
pub struct MapImage {
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

impl MapImage {
    pub fn from_memory(bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_dynamic(image::load_from_memory(bytes)?))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_dynamic(image::open(path)?))
    }

    fn from_dynamic(img: image::DynamicImage) -> Self {
        let rgba = img.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        Self {
            size,
            rgba: rgba.into_raw(),
        }
    }
}

/// Outcome of polling a [`PendingImage`]
#[derive(Debug)]
pub enum ImageEvent {
    Loaded(MapImage),
    Failed,
}

/// Handle to an image being decoded on a background thread
pub struct PendingImage {
    receiver: Option<Receiver<Result<MapImage>>>,
}

impl PendingImage {
    /// Starts decoding `path` in the background.
    ///
    /// `on_done` runs on the loader thread once a result is available, which
    /// lets a UI schedule a repaint.
    pub fn spawn<F>(path: impl Into<PathBuf>, on_done: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let path = path.into();
        let (sender, receiver) = crossbeam_channel::bounded(1);

        let spawned = thread::Builder::new()
            .name("map-image-loader".to_string())
            .spawn(move || {
                let result = MapImage::open(&path);
                // the receiver may be gone if the viewer already closed
                let _ = sender.send(result);
                on_done();
            });

        match spawned {
            Ok(_) => Self {
                receiver: Some(receiver),
            },
            Err(e) => {
                log::warn!("Could not start image loader: {}", e);
                Self { receiver: None }
            }
        }
    }

    /// True until a result (or failure) has been returned by [`poll`](Self::poll).
    pub fn is_pending(&self) -> bool {
        self.receiver.is_some()
    }

    /// Returns the load outcome once, then `None` forever.
    pub fn poll(&mut self) -> Option<ImageEvent> {
        let receiver = self.receiver.as_ref()?;
        let event = match receiver.try_recv() {
            Ok(Ok(image)) => {
                log::info!("Map image loaded ({}x{})", image.size[0], image.size[1]);
                ImageEvent::Loaded(image)
            }
            Ok(Err(e)) => {
                log::warn!("Map image unavailable, using placeholder: {}", e);
                ImageEvent::Failed
            }
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                log::warn!("Map image loader exited without a result");
                ImageEvent::Failed
            }
        };
        self.receiver = None;
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::{Duration, Instant};

    const HEADER: &str =
        "Volcano Name,Country,Type,TypeCategory,Status,Last Known Eruption,Latitude,Longitude,Elevation (m)\n";

    #[test]
    fn test_decimal_comma_row() {
        let csv = "Latitude,Longitude,Elevation (m)\n\"45,5\",10.2,1200\n";
        let dataset = load_table_from_reader(csv.as_bytes()).unwrap();

        let record = &dataset.records()[0];
        assert_eq!(record.latitude, 45.5);
        assert_eq!(record.longitude, 10.2);
        assert_eq!(record.elevation, Some(1200.0));
        assert_eq!(record.name, "");
    }

    #[test]
    fn test_unknown_latitude_is_dropped() {
        let csv = format!(
            "{HEADER}Etna,Italy,Stratovolcano,Stratovolcano,Holocene,D1,37.734,15.004,3357\n\
             Ghost,Nowhere,,,,,unknown,10,100\n\
             Fuji,Japan,Stratovolcano,Stratovolcano,Historical,D3,35.358,138.731,NA\n"
        );
        let dataset = load_table_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].name, "Etna");
        assert_eq!(dataset.records()[0].kind, "Stratovolcano");
        assert_eq!(dataset.records()[0].last_eruption, "D1");
        assert_eq!(dataset.records()[1].name, "Fuji");
        assert_eq!(dataset.records()[1].elevation, None);
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let csv = format!("{HEADER}Etna,Italy,Stratovolcano\nX,Y,,,,,1,2\n");
        let dataset = load_table_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].elevation, None);
    }

    #[test]
    fn test_no_valid_rows() {
        let csv = "Latitude,Longitude\nna,na\n,\n";
        assert!(matches!(
            load_table_from_reader(csv.as_bytes()),
            Err(VolcanoError::NoValidRows)
        ));
    }

    #[test]
    fn test_missing_coordinate_column() {
        let csv = "Lat,Longitude\n1,2\n";
        match load_table_from_reader(csv.as_bytes()) {
            Err(VolcanoError::MissingColumn(name)) => assert_eq!(name, "Latitude"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_load_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Latitude,Longitude\n1.5,2.5\n").unwrap();

        let dataset = load_table(file.path()).unwrap();
        assert_eq!(dataset.records()[0].position().lat, 1.5);
    }

    #[test]
    fn test_missing_table_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_table(dir.path().join("data.csv")),
            Err(VolcanoError::Io(_))
        ));
    }

    fn wait_for(pending: &mut PendingImage) -> ImageEvent {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(event) = pending.poll() {
                return event;
            }
            assert!(Instant::now() < deadline, "image loader timed out");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_pending_image_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut pending = PendingImage::spawn(dir.path().join("map.jpg"), || {});

        assert!(matches!(wait_for(&mut pending), ImageEvent::Failed));
        assert!(!pending.is_pending());
        assert!(pending.poll().is_none());
    }

    #[test]
    fn test_pending_image_loads_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.png");
        image::RgbaImage::from_pixel(4, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let mut pending = PendingImage::spawn(&path, || {});
        match wait_for(&mut pending) {
            ImageEvent::Loaded(image) => {
                assert_eq!(image.size, [4, 2]);
                assert_eq!(&image.rgba[..4], &[10, 20, 30, 255]);
            }
            ImageEvent::Failed => panic!("png should decode"),
        }
    }
}
