use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match clinic_admin_lib::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("clinic-admin: {e}");
            ExitCode::FAILURE
        }
    }
}
