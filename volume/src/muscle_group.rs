use crate::{LoggedSet, set_volume};

/// A logged set joined with the metadata of the exercise it belongs to.
/// The upstream query layer supplies the join; nothing is looked up here.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExerciseSet {
    pub set: LoggedSet,
    /// Exercise display name.
    pub exercise: String,
    /// Primary muscle group of the exercise.
    pub muscle_group: String,
}

#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MuscleGroupVolume {
    pub muscle_group: String,
    pub volume: f64,
    pub sets: usize,
    /// Distinct exercise names contributing to the group, in first-seen
    /// order.
    pub exercises: Vec<String>,
}

/// Volume per primary muscle group.
///
/// Groups appear in first-appearance order of the input. Warm-up sets are
/// skipped entirely and do not increment any count.
pub fn muscle_group_volume(sets: impl IntoIterator<Item = ExerciseSet>) -> Vec<MuscleGroupVolume> {
    let mut groups = Vec::<MuscleGroupVolume>::new();

    for ExerciseSet {
        set,
        exercise,
        muscle_group,
    } in sets
    {
        if set.is_warmup {
            continue;
        }

        let group = match groups
            .iter_mut()
            .find(|this| this.muscle_group == muscle_group)
        {
            Some(group) => group,
            None => {
                groups.push(MuscleGroupVolume {
                    muscle_group,
                    volume: 0.0,
                    sets: 0,
                    exercises: Vec::new(),
                });

                groups.last_mut().expect("just pushed")
            }
        };

        group.volume += set_volume(&set);
        group.sets += 1;

        if !group.exercises.contains(&exercise) {
            group.exercises.push(exercise);
        }
    }

    groups
}
