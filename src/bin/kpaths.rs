use std::env;
use std::process::ExitCode;
use std::time::Instant;

use k_paths::request::RouteRequest;
use k_paths::Yen;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "kpaths".to_string());
    let input_path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => {
            eprintln!("Usage: {} [input_file_path]", program);
            return ExitCode::FAILURE;
        }
    };

    let mut request = match RouteRequest::from_file(&input_path) {
        Ok(request) => request,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    // Reading the input file is not part of the timed section
    let start = Instant::now();
    let distances = Yen::new().k_shortest_distances(
        &mut request.network,
        &request.source,
        &request.destination,
        request.k,
    );
    let elapsed = start.elapsed();

    println!("\nResults");
    if distances.is_empty() {
        println!("No path was found from source to destination.\n");
    } else {
        let rendered: Vec<String> = distances
            .iter()
            .map(|distance| format!("{:.4}", distance.into_inner()))
            .collect();
        println!("{}\n", rendered.join(", "));
    }

    println!(
        "Execution time - {:.2} milliseconds\n",
        elapsed.as_secs_f64() * 1_000.0
    );

    ExitCode::SUCCESS
}
