use std::io::Write;

use volcano_map::{
    load_table_from_reader, DrawCommand, HoverState, LoadState, PointerState, ViewerConfig,
    VolcanoMap, VolcanoMapView,
};

const VOLCANOES: &str = "\
Volcano Name,Country,Type,TypeCategory,Status,Last Known Eruption,Latitude,Longitude,Elevation (m)
Etna,Italy,Stratovolcano,Stratovolcano,Historical,D1,37.734,15.004,3357
Hekla,Iceland,Stratovolcano,Stratovolcano,Historical,D1,\"63,98\",\"-19,666\",1490
Kilauea,United States,Shield volcano,Shield,Historical,D1,19.421,-155.287,1222
Broken,Nowhere,Unknown,Unknown,Unknown,Unknown,unknown,10.0,100
Loihi,United States,Submarine volcano,Submarine,Holocene,,18.92,-155.27,-975
Mystery,,,,,,-10.5,120.25,NA
";

/// Integration tests driving the library the way the viewer does
#[cfg(test)]
mod integration_tests {
    use super::*;
    use egui::{Context, Event, Pos2, RawInput, Rect};

    fn ready_map() -> VolcanoMap {
        let dataset = load_table_from_reader(VOLCANOES.as_bytes()).unwrap();
        let mut map = VolcanoMap::with_dataset(ViewerConfig::default(), dataset);
        map.set_viewport(1280.0, 1000.0);
        map
    }

    fn frame_input(pointer: Option<Pos2>) -> RawInput {
        let mut raw_input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(1280.0, 1000.0))),
            ..Default::default()
        };
        if let Some(pos) = pointer {
            raw_input.events.push(Event::PointerMoved(pos));
        }
        raw_input
    }

    /// Test loading and normalization of a realistic table
    #[test]
    fn test_table_normalization() {
        let map = ready_map();
        let dataset = map.load_state().dataset().unwrap();

        assert_eq!(dataset.len(), 5);
        let hekla = &dataset.records()[1];
        assert_eq!(hekla.latitude, 63.98);
        assert_eq!(hekla.longitude, -19.666);
        assert_eq!(dataset.records()[4].elevation, None);

        let range = dataset.elevation_range();
        assert_eq!(range.min, -975.0);
        assert_eq!(range.max, 3357.0);
    }

    /// Test hovering each marker shows its record
    #[test]
    fn test_hover_each_marker() {
        let mut map = ready_map();
        let centers: Vec<_> = map.markers().iter().map(|m| (m.index, m.center)).collect();

        for (index, center) in centers {
            map.set_pointer(PointerState::new(Some(center)));
            let hovered = map.hover();
            // Kilauea and Loihi overlap at this scale; the later one is on top
            if index == 2 {
                assert_eq!(hovered, HoverState::Record(3));
            } else {
                assert_eq!(hovered, HoverState::Record(index));
            }
        }
    }

    /// Test the info panel reflects the hovered record
    #[test]
    fn test_info_panel_follows_hover() {
        let mut map = ready_map();
        let etna = map.markers()[0].center;

        map.set_pointer(PointerState::new(Some(etna)));
        let scene = map.scene();
        assert!(scene.contains_text("Etna (Italy)"));
        assert!(scene.contains_text("Elevation: 3357.000 m"));

        map.set_pointer(PointerState::default());
        assert!(map.scene().contains_text("Hover over a point"));
    }

    /// Test the full load path from a file on disk
    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VOLCANOES.as_bytes()).unwrap();

        let mut config = ViewerConfig::default();
        config.assets.table_path = file.path().to_path_buf();
        let mut map = VolcanoMap::new(config);
        assert!(map.load().is_ready());
    }

    /// Test a table with only invalid coordinates lands in the error state
    #[test]
    fn test_zero_valid_rows_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Latitude,Longitude\nunknown,1\nNA,2\n").unwrap();

        let mut config = ViewerConfig::default();
        config.assets.table_path = file.path().to_path_buf();
        let mut map = VolcanoMap::new(config);
        map.set_viewport(1280.0, 1000.0);

        assert!(matches!(map.load(), LoadState::Error(_)));
        let scene = map.scene();
        assert!(scene.contains_text("no valid rows"));
        assert!(!scene.commands.iter().any(|c| matches!(
            c,
            DrawCommand::Circle { .. } | DrawCommand::MapImage { .. } | DrawCommand::Line { .. }
        )));
    }

    /// Test painting a frame headlessly through egui
    #[test]
    fn test_headless_egui_frame() {
        let ctx = Context::default();
        let mut view = VolcanoMapView::from_parts(ready_map(), None);
        let etna = view.map().markers()[0].center;

        let output = ctx.run(frame_input(Some(Pos2::new(etna.x as f32, etna.y as f32))), |ctx| {
            view.show(ctx);
        });

        assert!(!output.shapes.is_empty());
        assert_eq!(view.map().hover(), HoverState::Record(0));
        assert!(!view.has_texture());
    }

    /// Test the view picks up resizes between frames
    #[test]
    fn test_headless_resize() {
        let ctx = Context::default();
        let mut view = VolcanoMapView::from_parts(ready_map(), None);

        ctx.run(frame_input(None), |ctx| view.show(ctx));
        let before = view.map().layout().map;

        let raw_input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(1920.0, 1080.0))),
            ..Default::default()
        };
        ctx.run(raw_input, |ctx| view.show(ctx));
        let after = view.map().layout().map;

        assert_ne!(before, after);
        assert_eq!(after.width, 2.0 * after.height);
    }

    /// Test uploading the background image switches off the placeholder
    #[test]
    fn test_image_upload() {
        let ctx = Context::default();
        let mut view = VolcanoMapView::from_parts(ready_map(), None);
        let image = volcano_map::MapImage {
            size: [2, 1],
            rgba: vec![255, 0, 0, 255, 0, 0, 255, 255],
        };

        ctx.run(frame_input(None), |ctx| {
            view.set_image(ctx, &image);
            view.show(ctx);
        });

        assert!(view.has_texture());
        assert!(view.map().image_available());
    }
}
