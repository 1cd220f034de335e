use akma::key::{AkmaKeyDeriver, ApplicationKeyDeriver};
use clap::Parser;

fn main() {
    let Args {
        kausf,
        supi,
        routing_indicator,
        mcc,
        mnc,
        af_id,
        log_level,
    } = Args::parse();

    if let Some(log_level) = log_level {
        println!("- Using log level {}", log_level);
        simple_logger::init_with_level(log_level).unwrap();
    }

    let kausf = match hex::decode(&kausf) {
        Ok(kausf) => kausf,
        Err(err) => {
            eprintln!("- K_AUSF is not a valid hex string: {err}");
            std::process::exit(1);
        }
    };

    println!(
        "- Deriving for SUPI {}, routing indicator {}, MCC {}, MNC {}",
        supi, routing_indicator, mcc, mnc
    );

    let (kakma, a_kid) = AkmaKeyDeriver::default()
        .derive(&kausf, &supi, &routing_indicator, &mcc, &mnc)
        .unwrap_or_else(|err| {
            eprintln!("- {err}");
            std::process::exit(1);
        });

    println!("- K_AKMA: {}", hex::encode(kakma.as_bytes()));
    println!("- A-TID:  {}", hex::encode(a_kid.a_tid()));
    println!("- A-KID:  {}", a_kid);

    if let Some(af_id) = af_id {
        let kaf = ApplicationKeyDeriver::default()
            .derive(&kakma, &af_id)
            .unwrap_or_else(|err| {
                eprintln!("- {err}");
                std::process::exit(1);
            });
        println!("- K_AF for {}: {}", af_id, hex::encode(kaf.as_bytes()));
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// K_AUSF as hex string
    #[arg(short, long, default_value = "0000000000000000000000000000000000000000000000000000000000000000")]
    kausf: String,
    #[arg(short, long, default_value = "001010000000001")]
    supi: String,
    #[arg(short, long, default_value = "0001")]
    routing_indicator: String,
    #[arg(long, default_value = "001")]
    mcc: String,
    #[arg(long, default_value = "01")]
    mnc: String,
    /// AF_ID to derive a K_AF for
    #[arg(short, long)]
    af_id: Option<String>,
    #[arg(short, long)]
    log_level: Option<log::Level>,
}
