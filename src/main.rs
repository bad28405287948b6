//! # Iteria Demo Viewer
//!
//! Opens a macroquad window that exercises the helpers on a live frame clock:
//! a turret turns towards a wandering target with `rotate_towards`, sprays a
//! cone of sampled directions along its aim, and is watched by a camera that
//! follows with `delta_lerp`.

use clap::Parser;
use iteria::{
    bezier_quadratic_offset, display_name, point_in_frustum, quaternion_angle, random_inside_cone_towards,
    random_on_unit_circle, remap_clamped, rotate_towards, ColorWith, Cycle, DeltaLerp,
    DemoSettings, FrameClock, IteriaResult, MacroquadClock, SqrDist,
};
use macroquad::prelude::{
    clear_background, draw_cube, draw_grid, draw_line_3d, draw_sphere, draw_text, is_key_pressed,
    next_frame, set_camera, set_default_camera, Camera, Camera3D, Color, Conf, KeyCode, Quat, Vec3,
    BLACK, DARKGRAY, GRAY, GREEN, LIGHTGRAY, ORANGE, RED, SKYBLUE, WHITE, YELLOW,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

#[cfg(feature = "dev-tools")]
use tracing_subscriber::EnvFilter;

/// Number of pickups scattered around the turret.
const PICKUP_COUNT: usize = 8;

/// Line segments used to draw the projectile arc.
const ARC_SEGMENTS: usize = 16;

/// Command line arguments for the demo viewer.
#[derive(Parser, Debug)]
#[command(name = "iteria")]
#[command(about = "Interactive viewer for the Iteria geometry helpers")]
#[command(version)]
struct Args {
    /// Random seed, overrides the settings file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Path to a JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Where the camera tries to sit.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CameraMode {
    Orbit,
    BehindTurret,
    TopDown,
}

impl Cycle for CameraMode {
    const ALL: &'static [Self] = &[
        CameraMode::Orbit,
        CameraMode::BehindTurret,
        CameraMode::TopDown,
    ];
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Iteria Demo".to_owned(),
        window_width: 1024,
        window_height: 768,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    log::info!("Starting Iteria demo v{}", iteria::VERSION);

    if let Err(e) = run(&args).await {
        log::error!("Demo failed: {e}");
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(log_level))
            .with_target(false)
            .init();
        tracing::info!("Tracing subscriber installed with filter {log_level}");
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        if let Err(e) = env_logger::Builder::new()
            .parse_filters(log_level)
            .try_init()
        {
            eprintln!("Logging already initialized: {e}");
        }
    }
}

/// Picks a point on a ring around the turret.
fn random_target<R: Rng>(rng: &mut R) -> Vec3 {
    let radius: f32 = rng.gen_range(3.0..8.0);
    random_on_unit_circle(rng) * radius + Vec3::Y * 0.5
}

/// Runs the demo until the window closes or Escape is pressed.
async fn run(args: &Args) -> IteriaResult<()> {
    let mut settings = match &args.config {
        Some(path) => DemoSettings::load(path)?,
        None => DemoSettings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    settings.validate()?;
    log::info!("Running with {settings:?}");

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let clock = MacroquadClock;

    let turret = Vec3::new(0.0, 0.5, 0.0);
    let mut aim = Quat::IDENTITY;
    let mut target = random_target(&mut rng);
    let mut retarget_timer = settings.retarget_seconds;
    let mut camera_mode = CameraMode::Orbit;
    let mut camera_position = Vec3::new(-8.0, 6.0, -8.0);
    let pickups: Vec<Vec3> = (0..PICKUP_COUNT).map(|_| random_target(&mut rng)).collect();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            log::info!("Viewer closed");
            break;
        }
        if is_key_pressed(KeyCode::Tab) {
            camera_mode = camera_mode.next();
            log::debug!("Camera mode: {}", display_name(&camera_mode));
        }

        let delta_time = clock.delta_time();
        retarget_timer -= delta_time;
        if retarget_timer <= 0.0 {
            target = random_target(&mut rng);
            retarget_timer = settings.retarget_seconds;
            log::debug!("New target at {target}");
        }

        let desired = Quat::from_rotation_arc(Vec3::Z, (target - turret).normalize_or_zero());
        aim = rotate_towards(aim, desired, settings.turn_rate_degrees * delta_time);
        let forward = aim * Vec3::Z;
        let aim_error = quaternion_angle(aim, desired);

        let camera_goal = match camera_mode {
            CameraMode::Orbit => Vec3::new(-8.0, 6.0, -8.0),
            CameraMode::BehindTurret => turret - forward * 6.0 + Vec3::Y * 3.0,
            CameraMode::TopDown => Vec3::new(0.0, 14.0, 0.1),
        };
        camera_position = camera_position.delta_lerp_sharpness(
            camera_goal,
            settings.follow_speed,
            settings.sharpness,
            &clock,
        );

        let camera = Camera3D {
            position: camera_position,
            up: Vec3::Y,
            target: turret,
            ..Default::default()
        };
        set_camera(&camera);

        clear_background(BLACK);
        draw_grid(20, 1.0, DARKGRAY, GRAY);
        draw_cube(turret, Vec3::ONE, None, LIGHTGRAY);

        let muzzle = turret + forward * 1.5;
        draw_line_3d(turret, muzzle, YELLOW);

        let spray = YELLOW.with_a(0.25);
        for _ in 0..settings.cone_samples {
            let direction = random_inside_cone_towards(
                &mut rng,
                forward,
                Vec3::Y,
                settings.cone_degrees,
                1.0,
                1.0,
            );
            draw_line_3d(muzzle, muzzle + direction * 4.0, spray);
        }

        // Arc from the muzzle to the target, bowed upwards.
        let lift = Vec3::Y * 2.0;
        let mut previous = muzzle;
        for step in 1..=ARC_SEGMENTS {
            let t = step as f32 / ARC_SEGMENTS as f32;
            let point = bezier_quadratic_offset(muzzle, target, lift, t);
            draw_line_3d(previous, point, SKYBLUE);
            previous = point;
        }

        // Target turns from red to green as the turret lines up.
        let lined_up = remap_clamped(aim_error, 0.0, 45.0, 1.0, 0.0);
        let target_color = Color::new(1.0 - lined_up, lined_up, 0.0, 1.0);
        draw_sphere(target, 0.3, None, target_color);

        let nearest = SqrDist::nearest(target, &pickups);
        for (index, pickup) in pickups.iter().enumerate() {
            let highlighted = matches!(nearest, Some((i, _)) if i == index);
            let color = if highlighted { ORANGE } else { GREEN };
            draw_cube(*pickup, Vec3::splat(0.25), None, color);
        }

        let target_visible = point_in_frustum(&camera.matrix(), target);

        set_default_camera();

        draw_text(
            &format!("camera: {} (Tab to switch)", display_name(&camera_mode)),
            10.0,
            24.0,
            24.0,
            WHITE,
        );
        draw_text(
            &format!("aim error: {aim_error:.1} deg"),
            10.0,
            48.0,
            24.0,
            WHITE,
        );
        if let Some((_, mut distance)) = nearest {
            draw_text(
                &format!("nearest pickup to target: {:.2}", distance.root()),
                10.0,
                72.0,
                24.0,
                WHITE,
            );
        }
        if !target_visible {
            draw_text("target off screen", 10.0, 96.0, 24.0, RED);
        }

        next_frame().await;
    }

    log::info!("Demo loop ended");
    Ok(())
}
