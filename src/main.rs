use anyhow::{Context, Result, bail};
use clap::{ArgAction, ArgGroup, Parser};
use deqode::core::{DEFAULT_AMPLITUDE_TOLERANCE, NUM_QUBITS};
use deqode::tree::node_label;
use deqode::{
    AmplitudeDecoder, DecoderConfig, RoundingMode, Simulator, Template, TemplateAngles, decode_circuit, encode_name,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "deqode")]
#[command(version, about = "Hide a short name in the amplitudes of a three-qubit state")]
#[command(group(ArgGroup::new("mode").required(true).args(["encode", "decode"])))]
struct Cli {
    /// Name to encode (1-8 lowercase letters)
    #[arg(long, value_name = "NAME")]
    encode: Option<String>,

    /// Decode a name from a norm and seven angles
    #[arg(long)]
    decode: bool,

    /// Gate layout the angles belong to
    #[arg(long, default_value = "tree")]
    template: Template,

    /// Tie-breaking rule when rounding scaled amplitudes
    #[arg(long, default_value = "half-even")]
    rounding: RoundingMode,

    /// Amplitudes at or below this magnitude are treated as padding
    #[arg(long, default_value_t = DEFAULT_AMPLITUDE_TOLERANCE)]
    tolerance: f64,

    /// Norm printed by --encode (prompted for when omitted)
    #[arg(long, requires = "decode", allow_hyphen_values = true)]
    norm: Option<f64>,

    /// Seven comma-separated angles (prompted for when omitted)
    #[arg(long, requires = "decode", value_delimiter = ',', allow_hyphen_values = true)]
    angles: Option<Vec<f64>>,

    /// Also sample this many measurements of the decoded state
    #[arg(long, requires = "decode")]
    shots: Option<u64>,

    /// Seed for --shots
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures
            return if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity_level(cli.verbose)));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&cli, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn run(cli: &Cli, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    match &cli.encode {
        Some(name) => encode(cli, name, out),
        None => decode(cli, input, out),
    }
}

fn encode(cli: &Cli, name: &str, out: &mut impl Write) -> Result<()> {
    let encoded = encode_name(name).with_context(|| format!("cannot encode {name:?}"))?;
    let circuit = encoded.circuit(cli.template);

    writeln!(out, "Decode hint: ‖|ψ⟩‖ = {:.2}", encoded.norm)?;
    writeln!(out, "{circuit}")?;
    for (label, angle) in angle_labels(cli.template).iter().zip(encoded.angles_for(cli.template)) {
        writeln!(out, "{label} = {angle}")?;
    }
    Ok(())
}

fn decode(cli: &Cli, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let norm = match cli.norm {
        Some(norm) => norm,
        None => prompt_f64(input, out, "‖|ψ⟩‖")?,
    };
    let angles = match &cli.angles {
        Some(angles) => angles.clone(),
        None => {
            let mut angles = Vec::new();
            for label in angle_labels(cli.template) {
                angles.push(prompt_f64(input, out, &label)?);
            }
            angles
        }
    };

    let circuit = cli.template.circuit(&angles)?;
    let simulator = Simulator::new();
    let decoder = AmplitudeDecoder::with_config(DecoderConfig { tolerance: cli.tolerance, rounding: cli.rounding });
    let name = decode_circuit(&simulator, &decoder, &circuit, norm)?;
    writeln!(out, "Decoded name: {name}")?;

    if let Some(shots) = cli.shots {
        let result = simulator.run(&circuit)?;
        writeln!(out, "Measured {shots} shots (seed {}):", cli.seed)?;
        for (index, count) in result.sample_counts(shots, cli.seed) {
            writeln!(out, "  {}: {count}", result.ket(index))?;
        }
    }
    Ok(())
}

/// Prompt labels in the order the template takes its angles.
fn angle_labels(template: Template) -> Vec<String> {
    match template {
        Template::Tree => (0..NUM_QUBITS)
            .flat_map(|depth| (0..1usize << depth).map(move |path| node_label(depth, path)))
            .collect(),
        Template::Compact => TemplateAngles::LABELS.iter().map(|l| l.to_string()).collect(),
    }
}

fn prompt_f64(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<f64> {
    write!(out, "{label} = ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input ended before {label} was given");
    }
    let value = line.trim();
    value.parse::<f64>().with_context(|| format!("{label}: {value:?} is not a number"))
}
