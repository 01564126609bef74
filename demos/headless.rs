use volcano_map::{
    rendering::scene::{record_details, record_heading},
    PointerState, ViewerConfig, VolcanoMap,
};

/// Example of using volcano-map without any window: load the table, lay out a
/// fixed viewport and report what sits under a few pointer positions.
fn main() -> volcano_map::Result<()> {
    env_logger::init();

    let config = ViewerConfig::default();
    let dataset = volcano_map::load_table(&config.assets.table_path)?;
    let range = dataset.elevation_range();
    println!("Loaded {} volcanoes", dataset.len());
    println!("Elevation range: {:.0} m .. {:.0} m", range.min, range.max);

    let mut map = VolcanoMap::with_dataset(config, dataset);
    map.set_viewport(1280.0, 1000.0);

    let layout = *map.layout();
    println!(
        "Map {:.0}x{:.0} at ({:.0}, {:.0}), legend at y={:.0}, info at y={:.0}",
        layout.map.width, layout.map.height, layout.map.x, layout.map.y, layout.legend.y, layout.info.y
    );

    // probe the first few markers plus an empty corner of the map
    let mut probes: Vec<_> = map.markers().iter().take(3).map(|m| m.center).collect();
    probes.push(volcano_map::Point::new(layout.map.x + 1.0, layout.map.y + 1.0));

    for probe in probes {
        map.set_pointer(PointerState::new(Some(probe)));
        match map.hovered_record() {
            Some(record) => {
                println!("({:.1}, {:.1}) -> {}", probe.x, probe.y, record_heading(record));
                for line in record_details(record).iter().filter(|l| !l.is_empty()) {
                    println!("    {line}");
                }
            }
            None => println!("({:.1}, {:.1}) -> nothing", probe.x, probe.y),
        }
    }

    let commands = map.scene().commands.len();
    println!("Frame has {commands} draw commands");

    Ok(())
}
