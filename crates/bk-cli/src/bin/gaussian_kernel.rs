use anyhow::Result;
use bk_kernels::KernelKind;

fn main() -> Result<()> {
    bk_cli::run(KernelKind::Gaussian)
}
