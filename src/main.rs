use anyhow::Result;
use std::path::Path;
use topo2energy::io::write_hbjson;
use topo2energy::topo::Face;
use topo2energy::{Cell, CellComplex, Cluster, ConvertOptions, Dictionary, Point, convert};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut kitchen = Dictionary::new();
    kitchen.insert("Name", "Kitchen");
    kitchen.insert("Type", "Generic Residential Program");

    let mut hall = Dictionary::new();
    hall.insert("Name", "Entrance Hall");

    let cells = vec![
        Cell::from_box(4., 4., 3., None, Some(kitchen))?,
        Cell::from_box(4., 4., 3., Some((4., 0., 0.)), Some(hall))?,
        Cell::from_box(8., 4., 3., Some((0., 0., 3.)), None)?,
    ];
    let complex = CellComplex::new("demo_building", cells)?;

    // A free-standing wall south of the building.
    let mut shading = Cluster::default();
    shading.add_face(Face::new(vec![
        Point::new(0., -3., 0.),
        Point::new(8., -3., 0.),
        Point::new(8., -3., 4.),
        Point::new(0., -3., 4.),
    ])?);

    let model = convert(&complex, Some(&shading), &ConvertOptions::default())?;
    for room in model.rooms() {
        println!(
            "{} (story: {}, floor area: {:.1} m2)",
            room.name,
            room.story.as_deref().unwrap_or("-"),
            room.floor_area()
        );
    }

    let path = write_hbjson(Path::new("model.hbjson"), &model, true)?;
    println!("Model written to {}", path.display());
    Ok(())
}
