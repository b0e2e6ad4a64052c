//! Zero-field muon spin polarisation in a linear F-μ-F complex.
//!
//! Usage: `muon_fluorine [config.toml]`. Writes one `.npz` archive per model
//! to `output/`.

#![allow(non_snake_case)]

use std::path::PathBuf;
use itertools::Itertools;
use ndarray as nd;
use rayon::iter::{ IntoParallelIterator, ParallelIterator };
use tracing::info;
use tracing_subscriber::EnvFilter;
use musr_sim::{
    mkdir,
    write_npz,
    config::SimConfig,
    consts::HBAR,
    diagnostics::{
        amplitude_histogram,
        basis_labels,
        eigenstate_labels,
        frequency_levels,
        transitions,
    },
    polarisation::polarisation_par,
    HBuilderDipolar,
    Model,
    ModelResult,
};

#[derive(Clone, Debug)]
struct Data {
    model: Model,
    D: nd::Array1<f64>,
}

fn doit(builder: &HBuilderDipolar, time: &nd::Array1<f64>) -> ModelResult<Data> {
    let model = builder.model()?;
    let D = polarisation_par(&model, time);
    Ok(Data { model, D })
}

fn report(name: &str, model: &Model) -> ModelResult<()> {
    let header: String
        = basis_labels(model).iter()
        .map(|s| format!("{s}|"))
        .collect();
    info!("{name}: {header}");
    for label in eigenstate_labels(model)? {
        let signs: String
            = label.sign_string().chars()
            .map(|c| format!("{c:<width$}|", width = model.particles()))
            .collect();
        info!(
            "{name}: {signs} j(j+1)={:.2}, jz={:.2}, E/ħ={}",
            label.j_squared,
            label.j_z,
            label.frequency
        );
    }
    info!(
        "{name}: levels {:?}; {} transitions",
        frequency_levels(model),
        transitions(model).len()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    info!(?config, "loaded configuration");

    let outdir = PathBuf::from("output");
    mkdir!(outdir)?;

    let time = config.time.times();
    let names = ["baseline", "compare"];
    let data: Vec<Data>
        = config.builders()
        .into_par_iter()
        .map(|builder| doit(&builder, &time))
        .collect::<ModelResult<_>>()?;

    for (name, Data { model, D }) in names.iter().zip(&data) {
        report(name, model)?;
        let hist = amplitude_histogram(model);
        let hist_freq: nd::Array1<i64> = hist.keys().copied().collect();
        let hist_amp: nd::Array1<f64> = hist.values().copied().collect();
        let levels: nd::Array1<i64> = frequency_levels(model).into();
        let trans = transitions(model);
        let trans: nd::Array2<i64>
            = nd::Array2::from_shape_vec(
                (trans.len(), 2),
                trans.iter().flat_map(|(a, b)| [*a, *b]).collect_vec(),
            )?;
        write_npz!(
            outdir.join(format!("muon_fluorine_{name}.npz")),
            arrays: {
                "time" => &time,
                "polarisation" => D,
                "frequencies" => &(model.energies() / HBAR),
                "rounded_frequencies" => model.rounded_frequencies(),
                "amplitudes" => model.amplitudes(),
                "hist_freq" => &hist_freq,
                "hist_amp" => &hist_amp,
                "levels" => &levels,
                "transitions" => &trans,
            }
        )?;
    }

    info!("done");
    Ok(())
}
