//! Example: Load and inspect a scene document.
//!
//! Run with: cargo run --example inspect_scene -- scenes/basic.json

use std::env;

use caster_core::{load_scene, Primitive, PrimitiveKind};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-file>");
        println!("\nExample:");
        println!("  cargo run --example inspect_scene -- scenes/basic.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("\n=== Scene: {} ===", path);
            println!("Primitives: {}", scene.len());
            println!("Cameras: {}", scene.count_of(PrimitiveKind::Camera));
            println!("Spheres: {}", scene.count_of(PrimitiveKind::Sphere));
            println!("Planes: {}", scene.count_of(PrimitiveKind::Plane));

            println!("\n--- Primitives ---");
            for (i, primitive) in scene.iter().enumerate() {
                match primitive {
                    Primitive::Camera { width, height } => {
                        println!("  [{}] camera {:.2} x {:.2}", i, width, height);
                    }
                    Primitive::Sphere {
                        color,
                        position,
                        radius,
                    } => {
                        println!(
                            "  [{}] sphere r={:.2} at ({:.2}, {:.2}, {:.2}) color ({:.2}, {:.2}, {:.2})",
                            i, radius, position.x, position.y, position.z, color.x, color.y, color.z
                        );
                    }
                    Primitive::Plane {
                        color,
                        position,
                        normal,
                    } => {
                        println!(
                            "  [{}] plane through ({:.2}, {:.2}, {:.2}) normal ({:.2}, {:.2}, {:.2}) color ({:.2}, {:.2}, {:.2})",
                            i,
                            position.x,
                            position.y,
                            position.z,
                            normal.x,
                            normal.y,
                            normal.z,
                            color.x,
                            color.y,
                            color.z
                        );
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("Error loading scene file: {}", e);
            std::process::exit(1);
        }
    }
}
