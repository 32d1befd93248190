use domain::system::platform::{HostFactsResolver, PlatformDetector};
use domain::SystemInfo;

#[test]
fn test_platform_detection() {
    let facts = HostFactsResolver::detect();

    println!("Platform: {}", facts);
    assert_eq!(facts.os, std::env::consts::OS);
    assert_eq!(facts.arch, std::env::consts::ARCH);
}

#[test]
fn test_detector_matches_resolver() {
    let facts = HostFactsResolver::new(PlatformDetector).resolve();

    assert_eq!(facts.os, PlatformDetector.os_name());
    assert_eq!(facts.arch, PlatformDetector.arch());
}
