use crate::charting::config::ChartingConfig;
use crate::charting::ranking::mucus_rank;
use crate::models::{DayRecord, MucusColor, MucusConsistency, Observation};

/// Whether a dominant observation shows a fertile enough pattern to be a
/// peak day, before the following day is considered.
pub fn is_peak_candidate(dominant: &Observation) -> bool {
    dominant.mucus.kind.is_stretch_or_lubrication()
        || dominant.mucus.color == MucusColor::Clear
        || dominant.mucus.consistency == MucusConsistency::Gummy
}

/// Day `index` is a peak day when it is a candidate and the next recorded
/// day has a strictly lower mucus rank. The last day never qualifies.
fn confirms_peak(days: &[DayRecord], index: usize) -> bool {
    let Some(current) = days[index].dominant.as_ref() else {
        return false;
    };
    if !is_peak_candidate(current) {
        return false;
    }

    days.get(index + 1)
        .and_then(|next| next.dominant.as_ref())
        .is_some_and(|next| mucus_rank(next.mucus.kind) < mucus_rank(current.mucus.kind))
}

/// Mark peak days and the post-peak days that follow them.
///
/// `days` must be in chronological order. Every previous peak marker is
/// cleared first, so scanning the same sequence twice gives the same
/// result. Every qualifying day is marked; the sequence is not split into
/// cycles here.
pub fn scan_peak_days(mut days: Vec<DayRecord>, config: &ChartingConfig) -> Vec<DayRecord> {
    for stamp in days.iter_mut().filter_map(|d| d.stamp.as_mut()) {
        stamp.is_peak_day = false;
        stamp.post_peak_offset = None;
    }

    let peaks: Vec<usize> = (0..days.len()).filter(|&i| confirms_peak(&days, i)).collect();

    for index in peaks {
        if let Some(stamp) = days[index].stamp.as_mut() {
            stamp.is_peak_day = true;
        }

        for offset in 1..=config.post_peak_days {
            let Some(day) = days.get_mut(index + usize::from(offset)) else {
                break;
            };
            // Only the offset changes; the day keeps its own symbol and color.
            if let Some(stamp) = day.stamp.as_mut() {
                stamp.post_peak_offset = Some(offset);
            }
        }
    }

    days
}
