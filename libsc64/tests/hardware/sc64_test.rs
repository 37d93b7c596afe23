use libsc64::device::Device;
use libsc64::transport::SerialTransport;
use libsc64::types::ConfigId;

fn port() -> Option<String> {
    std::env::var("SC64_PORT").ok()
}

#[test]
#[ignore]
fn probe_connected_sc64() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let Some(path) = port() else {
        eprintln!("SC64_PORT not set; skipping");
        return Ok(());
    };

    let transport = SerialTransport::open(&path)?;
    let mut dev = Device::new_with_transport(Box::new(transport)).reset()?;
    dev.state_reset()?;
    assert!(dev.check_device()?);
    assert!(dev.check_firmware_version()?);
    let _ = dev.config_get(ConfigId::ButtonMode)?;
    Ok(())
}
