use std::{
    sync::{mpsc::channel, Mutex},
    thread,
};

/// Runs `process_fn` over `inputs` on `threads` scoped workers and returns the outputs in input order.
///
/// Workers borrow `process_fn`, so it may capture references (a shared codec, for instance).
pub fn run<Input, Output>(threads: usize, inputs: Vec<Input>, process_fn: impl Fn(Input) -> Output + Sync) -> Vec<Output>
where
    Input: Send,
    Output: Send,
{
    let (input_sender, input_receiver) = channel::<(usize, Input)>();
    let (output_sender, output_receiver) = channel::<(usize, Output)>();
    for input in inputs.into_iter().enumerate() {
        // The receiver is alive until the end of this function.
        let _ = input_sender.send(input);
    }
    drop(input_sender);

    let input_receiver = Mutex::new(input_receiver);
    let process_fn = &process_fn;
    thread::scope(|scope| {
        for _ in 0..threads.max(1) {
            let input_receiver = &input_receiver;
            let output_sender = output_sender.clone();
            scope.spawn(move || loop {
                let input = match input_receiver.lock() {
                    Ok(receiver) => receiver.recv(),
                    Err(_) => break,
                };
                match input {
                    Ok((index, input)) => {
                        if output_sender.send((index, process_fn(input))).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            });
        }
    });
    drop(output_sender);

    let mut outputs: Vec<(usize, Output)> = output_receiver.iter().collect();
    outputs.sort_by_key(|&(index, _)| index);
    outputs.into_iter().map(|(_, output)| output).collect()
}
