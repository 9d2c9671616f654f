// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for batch generation
// reference: uses indicatif for progress bars and tracks per-term outcomes

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    pub terms_total: usize,
    pub terms_assembled: usize,
    pub terms_skipped: usize,
    pub terms_failed: usize,
    pub sources_collected: usize,
    pub duration_secs: f64,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terms_attempted(&self) -> usize {
        self.terms_assembled + self.terms_skipped + self.terms_failed
    }

    pub fn terms_per_second(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        self.terms_attempted() as f64 / self.duration_secs
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.terms_attempted();
        if total == 0 {
            return 0.0;
        }
        (self.terms_assembled as f64 / total as f64) * 100.0
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    terms_total: usize,
    terms_assembled: AtomicUsize,
    terms_skipped: AtomicUsize,
    terms_failed: AtomicUsize,
    sources_collected: AtomicUsize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_terms: usize, visible: bool) -> Self {
        let multi_progress = if visible {
            MultiProgress::new()
        } else {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        };

        let main_bar = create_progress_bar(&multi_progress, total_terms as u64);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            terms_total: total_terms,
            terms_assembled: AtomicUsize::new(0),
            terms_skipped: AtomicUsize::new(0),
            terms_failed: AtomicUsize::new(0),
            sources_collected: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn hidden(total_terms: usize) -> Self {
        Self::new(total_terms, false)
    }

    pub fn start_term(&self, term: &str) {
        self.main_bar.set_message(term.to_string());
    }

    pub fn inc_assembled(&self, sources: usize) {
        self.terms_assembled.fetch_add(1, Ordering::SeqCst);
        self.sources_collected.fetch_add(sources, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_skipped(&self) {
        self.terms_skipped.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_failed(&self) {
        self.terms_failed.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message("Generation complete");
        self.detail_bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> PipelineStats {
        PipelineStats {
            terms_total: self.terms_total,
            terms_assembled: self.terms_assembled.load(Ordering::SeqCst),
            terms_skipped: self.terms_skipped.load(Ordering::SeqCst),
            terms_failed: self.terms_failed.load(Ordering::SeqCst),
            sources_collected: self.sources_collected.load(Ordering::SeqCst),
            duration_secs: self.start_time.elapsed().as_secs_f64(),
        }
    }

    fn update_detail_bar(&self) {
        let message = format!(
            "Entries: {} | Skipped: {} | Failed: {}",
            self.terms_assembled.load(Ordering::SeqCst),
            self.terms_skipped.load(Ordering::SeqCst),
            self.terms_failed.load(Ordering::SeqCst)
        );

        self.detail_bar.set_message(message);
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        if !self.main_bar.is_finished() {
            self.finish();
        }
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    let style = ProgressStyle::default_bar()
        .template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    bar.set_style(style);
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    let style = ProgressStyle::default_bar()
        .template("{msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}
