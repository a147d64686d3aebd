use configs::ServiceKind;

fn main() -> std::process::ExitCode {
    server::bootstrap::launch(ServiceKind::Sales)
}
