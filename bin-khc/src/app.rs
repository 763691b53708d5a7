use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use khc::F2;
use khc_cube::{AnnCube, FaceSet, KhCube};
use khc_link::{Diagram, Edge};
use khc_matrix::Mat;

type Error = Box<dyn std::error::Error>;

#[derive(Debug, derive_more::Display)]
#[display("{msg}")]
pub struct AppError {
    msg: String
}

impl std::error::Error for AppError {}

fn app_err<T>(msg: String) -> Result<T, Error> {
    Err(AppError { msg }.into())
}

#[derive(Parser, Debug)]
#[command(author, version, about = "differential maps of resolution cubes over GF(2)", long_about = None)]
pub struct CliArgs {
    /// Diagram file, a JSON list of 4-tuples in PD notation.
    pub diagram: PathBuf,

    /// Compute the reduced theory.
    #[arg(short, long, conflicts_with = "faces")]
    pub reduced: bool,

    /// Annular faces file, a JSON list of edge lists with the special
    /// face first.
    #[arg(short, long)]
    pub faces: Option<PathBuf>,

    /// Restrict to the subcomplex of the given annular grading.
    #[arg(short, long, requires = "faces", allow_hyphen_values = true)]
    pub grading: Option<i64>,

    #[arg(long, default_value = "0")]
    pub log: u8
}

impl CliArgs {
    fn log_level(&self) -> log::LevelFilter {
        use log::LevelFilter::*;
        match self.log {
            1 => Info,
            2 => Debug,
            3 => Trace,
            _ => Off,
        }
    }
}

pub struct App {
    pub args: CliArgs
}

impl App {
    pub fn new() -> Self {
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> Result<String, Error> {
        self.init_logger();

        info!("args: {:?}", self.args);

        let (res, time) = measure(||
            guard_panic(|| self.dispatch())
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) {
        let l = self.args.log_level();
        khc::util::log::init_simple_logger(l).unwrap()
    }

    fn dispatch(&self) -> Result<String, Error> {
        let d = Diagram::load(&self.args.diagram)?;

        let ds = if let Some(path) = &self.args.faces {
            let faces = load_faces(path)?;
            let a = AnnCube::new(&d, &faces)?;
            if let Some(g) = self.args.grading {
                a.subcomplex(g)?
            } else {
                a.differentials()?
            }
        } else {
            KhCube::new(&d, self.args.reduced).differentials()
        };

        Ok(display(&ds))
    }
}

fn load_faces(path: &Path) -> Result<FaceSet, Error> {
    let json = fs::read_to_string(path)?;
    let faces: Vec<Vec<Edge>> = serde_json::from_str(&json)?;
    let faces = FaceSet::new(faces)?;
    Ok(faces)
}

fn display(ds: &[Mat<F2>]) -> String {
    let mut out = String::new();
    for (k, d) in ds.iter().enumerate() {
        let (rows, cols) = d.shape();
        writeln!(out, "d[{k}]: {cols} -> {rows}").ok();
        writeln!(out, "{d}").ok();
    }
    out
}

fn measure<F, Res>(proc: F) -> (Res, std::time::Duration)
where F: FnOnce() -> Res {
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

fn guard_panic<F, R>(f: F) -> Result<R, Error>
where F: FnOnce() -> Result<R, Error> + std::panic::UnwindSafe {
    std::panic::catch_unwind(f).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "unknown source of error".to_owned()
            }
        };
        app_err(format!("panic: {info}"))
    })
}
