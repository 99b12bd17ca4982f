//! Projectile launch simulation.
//!
//! A [`Projectile`] is launched into a [`World`] and advanced one [`World::tick`] at a time until
//! it hits the ground (its Y coordinate drops to 0 or below). Every position along the way is
//! reported to a [`LaunchObserver`], which can print it ([`ConsoleObserver`]) or plot it onto a
//! [`Canvas`] ([`ImageObserver`]).

use std::{
    env::{self, VarError},
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, ensure, Context};
use raytracer_image::{Canvas, Color};
use raytracer_linalg::{point, vector, Tuple};

/// Name of the environment variable that overrides the canvas size.
pub const CANVAS_SIZE_VAR: &str = "RAYTRACER_CANVAS_SIZE";

/// A point mass moving through a [`World`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position: Tuple,
    pub velocity: Tuple,
}

impl Projectile {
    pub fn new(position: Tuple, velocity: Tuple) -> Self {
        Self { position, velocity }
    }

    /// Returns whether the projectile is still in the air.
    pub fn is_airborne(&self) -> bool {
        self.position.y() > 0.0
    }
}

/// Environment that accelerates projectiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    pub gravity: Tuple,
    pub wind: Tuple,
}

impl World {
    pub fn new(gravity: Tuple, wind: Tuple) -> Self {
        Self { gravity, wind }
    }

    /// Advances `projectile` by one time step.
    ///
    /// The position moves by the current velocity, then the velocity is accelerated by gravity and
    /// wind.
    pub fn tick(&self, projectile: &Projectile) -> Projectile {
        Projectile {
            position: projectile.position + projectile.velocity,
            velocity: projectile.velocity + self.gravity + self.wind,
        }
    }
}

/// Receives the positions of a projectile during a launch.
pub trait LaunchObserver {
    /// Called once before the first position is recorded.
    fn start(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called for the launch position and after every tick while the projectile is airborne.
    fn record(&mut self, projectile: &Projectile) -> anyhow::Result<()>;

    /// Called once after the projectile has landed.
    fn complete(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<O: LaunchObserver + ?Sized> LaunchObserver for &mut O {
    fn start(&mut self) -> anyhow::Result<()> {
        (**self).start()
    }

    fn record(&mut self, projectile: &Projectile) -> anyhow::Result<()> {
        (**self).record(projectile)
    }

    fn complete(&mut self) -> anyhow::Result<()> {
        (**self).complete()
    }
}

/// Prints every recorded position as `tick N: (x, y, z)`.
pub struct ConsoleObserver<W: Write = io::Stdout> {
    out: W,
    ticks: usize,
}

impl ConsoleObserver {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out, ticks: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LaunchObserver for ConsoleObserver<W> {
    fn start(&mut self) -> anyhow::Result<()> {
        self.ticks = 0;
        Ok(())
    }

    fn record(&mut self, projectile: &Projectile) -> anyhow::Result<()> {
        let p = projectile.position;
        writeln!(self.out, "tick {}: ({}, {}, {})", self.ticks, p.x(), p.y(), p.z())?;
        self.ticks += 1;
        Ok(())
    }

    fn complete(&mut self) -> anyhow::Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Plots the trajectory onto a [`Canvas`] and writes it as a PPM file when the launch completes.
///
/// World coordinates are truncated towards zero and the Y axis is flipped, so that a projectile at
/// height 0 is plotted on the bottom edge of the canvas. Positions that fall outside of the canvas
/// are skipped.
pub struct ImageObserver {
    path: PathBuf,
    canvas: Canvas,
    color: Color,
}

impl ImageObserver {
    pub fn new<P: Into<PathBuf>>(path: P, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            canvas: Canvas::new(width, height),
            color: Color::RED,
        }
    }

    /// Sets the color used to plot positions (red by default).
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Maps a world position to canvas coordinates, or `None` if they would be negative.
    fn pixel_for(&self, position: Tuple) -> Option<(u32, u32)> {
        let x = position.x() as i64;
        let y = i64::from(self.canvas.height()) - position.y() as i64;
        Some((u32::try_from(x).ok()?, u32::try_from(y).ok()?))
    }
}

impl LaunchObserver for ImageObserver {
    fn record(&mut self, projectile: &Projectile) -> anyhow::Result<()> {
        let position = projectile.position;
        match self.pixel_for(position) {
            Some((x, y)) => {
                if let Err(e) = self.canvas.try_write_pixel(x, y, self.color) {
                    log::trace!("skipping {:?}: {}", position, e);
                }
            }
            None => log::trace!("skipping {:?}: left of or below the canvas", position),
        }
        Ok(())
    }

    fn complete(&mut self) -> anyhow::Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("failed to create '{}'", self.path.display()))?;
        self.canvas
            .write_ppm(BufWriter::new(file))
            .with_context(|| format!("failed to write '{}'", self.path.display()))?;
        log::info!("wrote trajectory to '{}'", self.path.display());
        Ok(())
    }
}

/// Runs a projectile through a [`World`] until it lands.
pub struct Launcher<O> {
    world: World,
    observer: O,
    max_ticks: usize,
}

impl<O: LaunchObserver> Launcher<O> {
    pub fn new(world: World, observer: O) -> Self {
        Self {
            world,
            observer,
            max_ticks: LaunchOptions::DEFAULT_MAX_TICKS,
        }
    }

    /// Sets the number of ticks after which a launch that has not landed is aborted.
    pub fn max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Launches `projectile` and returns the number of ticks it spent in the air.
    ///
    /// The launch position is recorded first, then the projectile is ticked while its Y coordinate
    /// is positive and every new position is recorded, including the one where it lands.
    ///
    /// # Errors
    ///
    /// Returns an error if the observer fails, or if the projectile is still airborne after the
    /// configured maximum number of ticks.
    pub fn launch(&mut self, mut projectile: Projectile) -> anyhow::Result<usize> {
        log::debug!(
            "launching from {:?} with velocity {:?}",
            projectile.position,
            projectile.velocity
        );

        self.observer.start()?;
        self.observer.record(&projectile)?;

        let mut ticks = 0;
        while projectile.is_airborne() {
            ensure!(
                ticks < self.max_ticks,
                "projectile did not land within {} ticks",
                self.max_ticks
            );
            projectile = self.world.tick(&projectile);
            ticks += 1;
            self.observer.record(&projectile)?;
        }

        log::debug!("landed at {:?} after {} ticks", projectile.position, ticks);
        self.observer.complete()?;
        Ok(ticks)
    }
}

/// Parameters of a projectile launch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchOptions {
    gravity: Tuple,
    wind: Tuple,
    start: Tuple,
    direction: Tuple,
    speed: f64,
    canvas_size: (u32, u32),
    max_ticks: usize,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            gravity: vector(0.0, -0.1, 0.0),
            wind: vector(-0.01, 0.0, 0.0),
            start: point(0.0, 1.0, 0.0),
            direction: vector(1.0, 1.8, 0.0),
            speed: 11.25,
            canvas_size: (1000, 1000),
            max_ticks: Self::DEFAULT_MAX_TICKS,
        }
    }
}

impl LaunchOptions {
    pub const DEFAULT_MAX_TICKS: usize = 100_000;

    /// Creates the default options, with the canvas size overridden by the
    /// `RAYTRACER_CANVAS_SIZE` environment variable if it is set.
    pub fn from_env() -> anyhow::Result<Self> {
        let options = Self::default();
        match env::var(CANVAS_SIZE_VAR) {
            Ok(size) => {
                let (width, height) = parse_canvas_size(&size)
                    .with_context(|| format!("invalid value for `{}`", CANVAS_SIZE_VAR))?;
                Ok(options.canvas_size(width, height))
            }
            Err(VarError::NotPresent) => Ok(options),
            Err(VarError::NotUnicode(s)) => {
                bail!("invalid value for `{}`: {:?}", CANVAS_SIZE_VAR, s)
            }
        }
    }

    pub fn gravity(mut self, gravity: Tuple) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn wind(mut self, wind: Tuple) -> Self {
        self.wind = wind;
        self
    }

    /// Sets the launch position.
    pub fn start(mut self, start: Tuple) -> Self {
        self.start = start;
        self
    }

    /// Sets the launch direction. It is normalized before being scaled by the speed.
    pub fn direction(mut self, direction: Tuple) -> Self {
        self.direction = direction;
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_size = (width, height);
        self
    }

    pub fn max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas_size.0
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas_size.1
    }

    pub fn world(&self) -> World {
        World::new(self.gravity, self.wind)
    }

    pub fn projectile(&self) -> Projectile {
        Projectile::new(self.start, self.direction.normalize() * self.speed)
    }

    /// Creates a [`Launcher`] for these options that reports to `observer`.
    pub fn launcher<O: LaunchObserver>(&self, observer: O) -> Launcher<O> {
        Launcher::new(self.world(), observer).max_ticks(self.max_ticks)
    }

    /// Creates an [`ImageObserver`] writing to `path` with the configured canvas size.
    pub fn image_observer<P: Into<PathBuf>>(&self, path: P) -> ImageObserver {
        ImageObserver::new(path, self.canvas_width(), self.canvas_height())
    }
}

/// Parses a canvas size of the form `<width>x<height>`.
pub fn parse_canvas_size(s: &str) -> anyhow::Result<(u32, u32)> {
    let (width, height) = s
        .trim()
        .split_once(['x', 'X'])
        .with_context(|| format!("expected `<width>x<height>`, got '{}'", s))?;
    let width = width
        .trim()
        .parse()
        .with_context(|| format!("invalid canvas width '{}'", width))?;
    let height = height
        .trim()
        .parse()
        .with_context(|| format!("invalid canvas height '{}'", height))?;
    Ok((width, height))
}
