pub mod ip_detector;
