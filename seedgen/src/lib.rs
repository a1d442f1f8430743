use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use num_traits::ToPrimitive;

pub mod args;

pub fn new_pb_with_template(len: impl ToPrimitive, template: &'static str) -> ProgressBar {
  let pb = ProgressBar::new(len.to_u64().unwrap_or(u64::MAX));
  pb.set_style(
    ProgressStyle::with_template(template)
      .unwrap_or_else(|_| ProgressStyle::default_bar())
      .progress_chars("#>-"),
  );
  pb
}

/// Create a new progress bar.
pub fn new_pb(len: impl ToPrimitive) -> ProgressBar {
  new_pb_with_template(
    len,
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})",
  )
}
