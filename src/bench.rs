use crate::{
    chronometer::Chronometer,
    configuration::Configuration,
    logger::Logger,
    thread_pool,
};
use base_x::{presets, Codec, Mode};
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Serialize)]
pub struct Measurement {
    name: String,
    operation: &'static str,
    mode: Mode,
    operations: usize,
    failures: usize,
    elapsed_ms: u128,
    ops_per_sec: u64,
}

/// Deterministic pseudo-random input: SHA-256 of the seed and index, repeated as needed.
pub fn input(seed: &str, index: usize, size: usize) -> Vec<u8> {
    let mut output = Vec::with_capacity(size);
    let mut counter: u64 = 0;
    while output.len() < size {
        let mut hasher = Sha256::new();
        hasher.update(seed.as_bytes());
        hasher.update((index as u64).to_be_bytes());
        hasher.update(counter.to_be_bytes());
        output.extend_from_slice(&hasher.finalize());
        counter += 1;
    }
    output.truncate(size);
    output
}

impl Measurement {
    pub fn failures(&self) -> usize {
        self.failures
    }
}

fn ops_per_sec(operations: usize, elapsed_ms: u128) -> u64 {
    (operations as u128 * 1000 / elapsed_ms.max(1)) as u64
}

struct Bench<'a> {
    configuration: &'a Configuration,
    logger: &'a Logger,
}

impl Bench<'_> {
    /// Runs `f` over every batch of `inputs` and counts the items for which it failed.
    fn measure<Input: Sync, Output: Send>(
        &self,
        name: &str,
        operation: &'static str,
        codec: &Codec,
        inputs: &[Input],
        f: impl Fn(&Codec, &Input) -> Option<Output> + Sync,
    ) -> (Measurement, Vec<Option<Output>>) {
        let batches: Vec<(usize, &[Input])> = inputs.chunks(self.configuration.batch_size()).enumerate().collect();
        let count = batches.len();
        let chronometer = Chronometer::new();
        let results = thread_pool::run(self.configuration.threads(), batches, |(index, batch)| {
            let outputs = batch.iter().map(|input| f(codec, input)).collect::<Vec<_>>();
            self.logger.progress(index, count, || format!("{} {} batch done", name, operation));
            outputs
        });
        let elapsed_ms = chronometer.elapsed().as_millis();

        let outputs: Vec<Option<Output>> = results.into_iter().flatten().collect();
        let failures = outputs.iter().filter(|output| output.is_none()).count();
        let measurement = Measurement {
            name: name.to_string(),
            operation,
            mode: codec.mode(),
            operations: inputs.len(),
            failures,
            elapsed_ms,
            ops_per_sec: ops_per_sec(inputs.len(), elapsed_ms),
        };
        self.logger.log(format!("{} {} x {} ops/sec", name, operation, measurement.ops_per_sec));
        (measurement, outputs)
    }

    fn run(&self, name: &str, codec: &Codec, inputs: &[Vec<u8>]) -> Vec<Measurement> {
        let (encoding, encoded) = self.measure(name, "encode", codec, inputs, |codec, input| codec.encode(input).ok());
        let (mut decoding, decoded) = self.measure(name, "decode", codec, &encoded, |codec, input| {
            input.as_ref().and_then(|input| codec.decode(input).ok())
        });
        // A decode that does not reproduce its input also counts as a failure.
        decoding.failures = decoded
            .iter()
            .zip(inputs)
            .filter(|(output, input)| output.as_ref() != Some(*input))
            .count();
        vec![encoding, decoding]
    }
}

/// Encodes then decodes the same inputs with the configured alphabet and the usual ones.
pub fn bench(configuration: &Configuration, logger: &Logger) -> Result<Vec<Measurement>, base_x::Error> {
    logger.log(format!(
        "Benchmarking {} inputs of {} bytes on {} threads",
        configuration.iterations(),
        configuration.input_size(),
        configuration.threads()
    ));
    let inputs: Vec<Vec<u8>> = (0..configuration.iterations())
        .map(|index| input(configuration.seed(), index, configuration.input_size()))
        .collect();

    let mut codecs = vec![(
        format!("base-x ({})", configuration.alphabet().chars().count()),
        Codec::with_options(configuration.alphabet(), configuration.options())?,
    )];
    for alphabet in [presets::BASE58, presets::BASE16, presets::BASE32, presets::BASE64] {
        if alphabet != configuration.alphabet() {
            codecs.push((format!("base-x ({})", alphabet.len()), Codec::new(alphabet)?));
        }
    }

    let bench = Bench { configuration, logger };
    Ok(codecs.iter().flat_map(|(name, codec)| bench.run(name, codec, &inputs)).collect())
}
