use super::*;

const SQUARE: &str = "\"loops\":[[[0.0,0.0],[100.0,0.0],[100.0,100.0],[0.0,100.0]]]";

fn glyph_bundle(letters: &[char]) -> String {
    let assets: Vec<String> = letters
        .iter()
        .map(|l| format!("{{\"path\":\"/svgs/{l}.svg\",{SQUARE}}}"))
        .collect();
    format!("{{\"assets\":[{}]}}", assets.join(","))
}

fn scene_with_glyphs(width: f32, height: f32, letters: &[char]) -> SceneCore {
    let mut scene = SceneCore::new(width, height, 0.0);
    scene
        .load_glyph_bundle_json(&glyph_bundle(letters))
        .expect("bundle should parse");
    scene
}

#[test]
fn walls_hug_the_container() {
    let walls = walls::build_walls(1200.0, 800.0, 100.0);

    assert_eq!(walls[0], Rect::new(0.0, 50.0, 1200.0, 50.0)); // top
    assert_eq!(walls[1], Rect::new(0.0, 900.0, 1200.0, 50.0)); // bottom
    assert_eq!(walls[2], Rect::new(-50.0, 100.0, 50.0, 800.0)); // left
    assert_eq!(walls[3], Rect::new(1200.0, 100.0, 50.0, 800.0)); // right
}

#[test]
fn zero_size_resize_is_ignored() {
    let mut scene = SceneCore::new(1200.0, 800.0, 0.0);

    scene.set_size(0.0, 600.0, 0.0);
    scene.set_size(900.0, 0.0, 0.0);

    assert_eq!(scene.width(), 1200.0);
    assert_eq!(scene.height(), 800.0);
    assert_eq!(scene.obstacles().len(), 4);
}

#[test]
fn reserved_box_is_replaced_by_id() {
    let mut scene = SceneCore::new(1200.0, 800.0, 0.0);

    scene.set_reserved_box("upload", 600.0, 400.0, 200.0, 100.0);
    scene.set_reserved_box("upload", 300.0, 200.0, 150.0, 80.0);
    scene.set_reserved_box("nav", 600.0, 50.0, 1200.0, 60.0);

    // 4 walls + 2 reserved boxes.
    let obstacles = scene.obstacles();
    assert_eq!(obstacles.len(), 6);
    assert!(obstacles.contains(&Rect::from_center(Vec2::new(300.0, 200.0), 150.0, 80.0)));
    assert!(!obstacles.contains(&Rect::from_center(Vec2::new(600.0, 400.0), 200.0, 100.0)));
}

#[test]
fn spawn_word_fails_on_unmapped_letter() {
    let mut scene = scene_with_glyphs(2000.0, 1500.0, &['A']);

    assert!(scene.spawn_word("AB").is_err());
    assert_eq!(scene.shape_count(), 0);
}

#[test]
fn spawn_word_places_shapes_inside_the_container() {
    let mut scene = scene_with_glyphs(2000.0, 1500.0, &['D', 'E', 'P']);

    let count = scene.spawn_word("DEEP").unwrap();
    assert_eq!(count, 4);

    for shape in scene.shapes() {
        let bb = shape.aabb();
        assert!(bb.x >= 0.0 && bb.y >= 0.0);
        assert!(bb.x + bb.w <= 2000.0);
        assert!(bb.y + bb.h <= 1500.0);
    }
}

#[test]
fn respawn_replaces_previous_shapes() {
    let mut scene = scene_with_glyphs(2000.0, 1500.0, &['O', 'U']);

    scene.spawn_word("OUU").unwrap();
    scene.spawn_word("O").unwrap();

    assert_eq!(scene.shape_count(), 1);
    assert_eq!(scene.positions().len(), 1);
    assert_eq!(scene.positions()[0].letter, 'O');
}

#[test]
fn settle_separates_overlapping_letters() {
    let mut scene = scene_with_glyphs(2000.0, 1500.0, &['O']);
    scene.set_seed(7);
    scene.set_relax_params(200, 24.0);
    scene.spawn_word("OOO").unwrap();

    scene.settle();

    let stats = scene.layout_stats();
    assert!(stats.iterations_run() >= 1);
    assert!(stats.converged());
    assert_eq!(stats.shape_count(), 3);

    let shapes = scene.shapes();
    for i in 0..shapes.len() {
        for j in (i + 1)..shapes.len() {
            assert!(!shapes[i].aabb().overlaps(&shapes[j].aabb()));
        }
    }
    for obstacle in scene.obstacles() {
        for shape in shapes {
            assert!(!shape.aabb().overlaps(&obstacle));
        }
    }
}

#[test]
fn settle_with_same_seed_is_reproducible() {
    let run = |seed: u32| {
        let mut scene = scene_with_glyphs(2000.0, 1500.0, &['S', 'O']);
        scene.set_seed(seed);
        scene.spawn_word("SOS").unwrap();
        scene.settle();
        scene.positions()
    };

    assert_eq!(run(31), run(31));
}

#[test]
fn settle_with_no_shapes_records_an_empty_converged_run() {
    let mut scene = SceneCore::new(1200.0, 800.0, 0.0);

    scene.settle();

    let stats = scene.layout_stats();
    assert!(stats.converged());
    assert_eq!(stats.shape_count(), 0);
    assert_eq!(stats.pair_corrections(), 0);
}
