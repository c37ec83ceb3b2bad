use io_impl::RealIo;
use rtti_lib::app::run;

fn main() {
    if let Err(e) = run(&RealIo()) {
        eprintln!("err {}", e);
        std::process::exit(1);
    }
}
