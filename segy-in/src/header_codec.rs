//! Byte-level decoding of the reel header and trace headers into the structs from
//! `segy_core::header_structs`.
use segy_core::bitconverter::{converter_chooser, BitConverter};
use segy_core::enums::*;
use segy_core::errors::*;
use segy_core::{BinHeader, TraceHeader, BIN_HEADER_LEN, TRACE_HEADER_LEN};

use num::FromPrimitive;

use std::convert::TryInto;

/// Parses a header from a byte slice known to have the right length for its kind.
pub trait HeaderFromBytes: Sized {
    fn from_bytes(bytes: &[u8]) -> Result<Self, SegyError>;
}

/// Parses a trace header, which additionally needs the reel header's endianness.
pub trait TraceHeaderFromBytes: Sized {
    fn from_bytes(bytes: &[u8], bin_header: &BinHeader) -> Result<Self, SegyError>;
}

impl HeaderFromBytes for BinHeader {
    fn from_bytes(bytes: &[u8]) -> Result<Self, SegyError> {
        if bytes.len() != BIN_HEADER_LEN {
            return Err(SegyError::BinHeaderLength { l: bytes.len() });
        }

        // Byte 96..100 is `0x01020304` written in the file's own endianness; reading it back
        // tells us which endianness that is, with no settings override needed.
        let le = bytes[96..100] == [1, 2, 3, 4];

        let u16_from_bytes = if le { u16::from_le_bytes } else { u16::from_be_bytes };
        let i16_from_bytes = if le { i16::from_le_bytes } else { i16::from_be_bytes };
        let u32_from_bytes = if le { u32::from_le_bytes } else { u32::from_be_bytes };

        let sample_format_code = SampleFormatCode::new(u16_from_bytes(bytes[24..26].try_into()?))?;
        let time_basis_code = TimeBasisCode::new(u16_from_bytes(bytes[310..312].try_into()?));
        let vibratory_polarity_code =
            VibratoryPolarityCode::new(u16_from_bytes(bytes[58..60].try_into()?));
        let impulse_signal_polarity =
            ImpulseSignalPolarity::new(u16_from_bytes(bytes[56..58].try_into()?));
        let measurement_system = MeasurementSystem::new(u16_from_bytes(bytes[54..56].try_into()?));
        let amplitude_recovery_method =
            AmplitudeRecoveryMethod::new(u16_from_bytes(bytes[52..54].try_into()?));
        let binary_gain_recovered =
            BinaryGainRecovered::new(u16_from_bytes(bytes[50..52].try_into()?));
        let correlated_traces =
            CorrelatedDataTraces::new(u16_from_bytes(bytes[48..50].try_into()?));
        let fixed_length_trace_flag =
            FixedLengthTraces::new(u16_from_bytes(bytes[302..304].try_into()?))?;

        Ok(BinHeader {
            job_id: u32_from_bytes(bytes[0..4].try_into()?),
            line_number: u32_from_bytes(bytes[4..8].try_into()?),
            reel_number: u32_from_bytes(bytes[8..12].try_into()?),
            no_traces: u16_from_bytes(bytes[12..14].try_into()?),
            no_aux_traces: u16_from_bytes(bytes[14..16].try_into()?),
            sample_interval: u16_from_bytes(bytes[16..18].try_into()?),
            sample_interval_original: u16_from_bytes(bytes[18..20].try_into()?),
            no_samples: u16_from_bytes(bytes[20..22].try_into()?),
            no_samples_original: u16_from_bytes(bytes[22..24].try_into()?),
            sample_format_code,
            ensemble_fold: u16_from_bytes(bytes[26..28].try_into()?),
            sorting_code: TraceSortingCode::new(i16_from_bytes(bytes[28..30].try_into()?)),
            vertical_sum: u16_from_bytes(bytes[30..32].try_into()?),
            sweep_frequency_start: u16_from_bytes(bytes[32..34].try_into()?),
            sweep_frequency_end: u16_from_bytes(bytes[34..36].try_into()?),
            sweep_length: u16_from_bytes(bytes[36..38].try_into()?),
            sweep_type: SweepTypeCode::new(u16_from_bytes(bytes[38..40].try_into()?)),
            sweep_channel_trace_no: u16_from_bytes(bytes[40..42].try_into()?),
            sweep_taper_at_start: u16_from_bytes(bytes[42..44].try_into()?),
            sweep_taper_at_end: u16_from_bytes(bytes[44..46].try_into()?),
            taper_type: TaperType::new(u16_from_bytes(bytes[46..48].try_into()?)),
            correlated_traces,
            binary_gain_recovered,
            amplitude_recovery_method,
            measurement_system,
            impulse_signal_polarity,
            vibratory_polarity_code,
            segy_revision_number: [bytes[300], bytes[301]],
            fixed_length_trace_flag,
            extended_header_count: u32_from_bytes(bytes[306..310].try_into()?),
            time_basis_code,
            binary_flag_direction_is_le: le,
        })
    }
}

impl TraceHeaderFromBytes for TraceHeader {
    fn from_bytes(bytes: &[u8], bin_header: &BinHeader) -> Result<Self, SegyError> {
        if bytes.len() != TRACE_HEADER_LEN {
            return Err(SegyError::TraceHeaderLength { l: bytes.len() });
        }

        let le = bin_header.binary_flag_direction_is_le;

        let u16_from_bytes = if le { u16::from_le_bytes } else { u16::from_be_bytes };
        let i16_from_bytes = if le { i16::from_le_bytes } else { i16::from_be_bytes };
        let i32_from_bytes = if le { i32::from_le_bytes } else { i32::from_be_bytes };

        let trace_name: [u8; 8] = if le {
            bytes[232..240].try_into()?
        } else {
            let reversed: Vec<u8> = bytes[232..240].iter().rev().copied().collect();
            reversed[..].try_into()?
        };

        // Coordinates are conventionally 32-bit integers; this crate does not support
        // overriding that with another sample format.
        let coordinate_parser: BitConverter = converter_chooser(SampleFormatCode::Int32, le)?;
        let coord_parser = |x: [u8; 4]| -> Result<i32, SegyError> {
            let float: f32 = coordinate_parser(&x)?;
            i32::from_f32(float).ok_or_else(|| SegyError::Encoding {
                msg: format!("coordinate value {} does not fit in i32", float),
            })
        };

        let source_measurement_unit =
            SourceMeasurementUnit::new(i16_from_bytes(bytes[230..232].try_into()?));
        let source_type = SourceType::new(i16_from_bytes(bytes[216..218].try_into()?));
        let trace_value_measurement_unit =
            TraceValueUnit::new(i16_from_bytes(bytes[202..204].try_into()?));
        let transduction_units = TransductionUnits::new(i16_from_bytes(bytes[210..212].try_into()?));
        let over_travel = OverTravel::new(u16_from_bytes(bytes[178..180].try_into()?));
        let time_base_code = TimeBasisCode::new(u16_from_bytes(bytes[166..168].try_into()?));
        let taper_type = TaperType::new(u16_from_bytes(bytes[138..140].try_into()?));
        let sweep_type = SweepType::new(u16_from_bytes(bytes[132..134].try_into()?));
        let correlated = Correlated::new(u16_from_bytes(bytes[124..126].try_into()?));
        let gain_type = GainType::new(u16_from_bytes(bytes[118..120].try_into()?));
        let coordinate_units = CoordinateUnits::new(u16_from_bytes(bytes[88..90].try_into()?));
        let data_use = DataUse::new(u16_from_bytes(bytes[34..36].try_into()?));
        let trace_identification_code = TraceIdCode::new(i16_from_bytes(bytes[28..30].try_into()?));

        Ok(TraceHeader {
            trace_sequence_on_line: i32_from_bytes(bytes[0..4].try_into()?),
            trace_sequence_in_file: i32_from_bytes(bytes[4..8].try_into()?),
            field_record_no: i32_from_bytes(bytes[8..12].try_into()?),
            trace_no: i32_from_bytes(bytes[12..16].try_into()?),
            energy_source_point_no: i32_from_bytes(bytes[16..20].try_into()?),
            ensemble_no: i32_from_bytes(bytes[20..24].try_into()?),
            trace_no_in_ensemble: i32_from_bytes(bytes[24..28].try_into()?),
            trace_identification_code,
            no_v_summed_traces: u16_from_bytes(bytes[30..32].try_into()?),
            no_h_stacked_traces: u16_from_bytes(bytes[32..34].try_into()?),
            data_use,
            source_to_receiver_distance: coord_parser(bytes[36..40].try_into()?)?,
            elevation_of_receiver_group: coord_parser(bytes[40..44].try_into()?)?,
            surface_elevation_of_source: coord_parser(bytes[44..48].try_into()?)?,
            source_depth: coord_parser(bytes[48..52].try_into()?)?,
            datum_elevation_of_receiver_group: coord_parser(bytes[52..56].try_into()?)?,
            datum_elevation_of_source: coord_parser(bytes[56..60].try_into()?)?,
            water_column_height_at_source: coord_parser(bytes[60..64].try_into()?)?,
            water_column_height_at_group: coord_parser(bytes[64..68].try_into()?)?,
            elevation_scalar: i16_from_bytes(bytes[68..70].try_into()?),
            coordinate_scalar: i16_from_bytes(bytes[70..72].try_into()?),
            source_x: coord_parser(bytes[72..76].try_into()?)?,
            source_y: coord_parser(bytes[76..80].try_into()?)?,
            receiver_group_x: coord_parser(bytes[80..84].try_into()?)?,
            receiver_group_y: coord_parser(bytes[84..88].try_into()?)?,
            coordinate_units,
            weathing_velocity: u16_from_bytes(bytes[90..92].try_into()?),
            sub_weathering_velocity: u16_from_bytes(bytes[92..94].try_into()?),
            uphole_time_at_source: u16_from_bytes(bytes[94..96].try_into()?),
            uphole_time_at_group: u16_from_bytes(bytes[96..98].try_into()?),
            source_static_correction: u16_from_bytes(bytes[98..100].try_into()?),
            group_static_correction: u16_from_bytes(bytes[100..102].try_into()?),
            total_static_applied: u16_from_bytes(bytes[102..104].try_into()?),
            lag_time_a: u16_from_bytes(bytes[104..106].try_into()?),
            lag_time_b: u16_from_bytes(bytes[106..108].try_into()?),
            delay_recording_time: u16_from_bytes(bytes[108..110].try_into()?),
            mute_time_start: u16_from_bytes(bytes[110..112].try_into()?),
            mute_time_end: u16_from_bytes(bytes[112..114].try_into()?),
            no_samples_in_trace: u16_from_bytes(bytes[114..116].try_into()?),
            sample_interval_of_trace: u16_from_bytes(bytes[116..118].try_into()?),
            gain_type,
            instrument_gain_constant: u16_from_bytes(bytes[120..122].try_into()?),
            instrument_initial_gain: u16_from_bytes(bytes[122..124].try_into()?),
            correlated,
            sweep_frequency_at_start: u16_from_bytes(bytes[126..128].try_into()?),
            sweep_frequency_at_end: u16_from_bytes(bytes[128..130].try_into()?),
            sweep_length: u16_from_bytes(bytes[130..132].try_into()?),
            sweep_type,
            sweep_trace_taper_length_at_start: u16_from_bytes(bytes[134..136].try_into()?),
            sweep_trace_taper_length_at_end: u16_from_bytes(bytes[136..138].try_into()?),
            taper_type,
            alias_filter_frequency: u16_from_bytes(bytes[140..142].try_into()?),
            alias_filter_slope: u16_from_bytes(bytes[142..144].try_into()?),
            notch_filter_frequency: u16_from_bytes(bytes[144..146].try_into()?),
            notch_filter_slope: u16_from_bytes(bytes[146..148].try_into()?),
            low_cut_frequency: u16_from_bytes(bytes[148..150].try_into()?),
            high_cut_frequency: u16_from_bytes(bytes[150..152].try_into()?),
            low_cut_slope: u16_from_bytes(bytes[152..154].try_into()?),
            high_cut_slope: u16_from_bytes(bytes[154..156].try_into()?),
            year_recorded: u16_from_bytes(bytes[156..158].try_into()?),
            day_of_year: u16_from_bytes(bytes[158..160].try_into()?),
            hour_of_day: u16_from_bytes(bytes[160..162].try_into()?),
            minute_of_hour: u16_from_bytes(bytes[162..164].try_into()?),
            second_of_minute: u16_from_bytes(bytes[164..166].try_into()?),
            time_base_code,
            trace_weighting_factor: u16_from_bytes(bytes[168..170].try_into()?),
            geophone_group_number_roll_pos1: u16_from_bytes(bytes[170..172].try_into()?),
            geophone_group_number_first_trace_orig_field: u16_from_bytes(
                bytes[172..174].try_into()?,
            ),
            geophone_group_number_last_trace_orig_field: u16_from_bytes(
                bytes[174..176].try_into()?,
            ),
            gap_size: u16_from_bytes(bytes[176..178].try_into()?),
            over_travel,
            x_ensemble: coord_parser(bytes[180..184].try_into()?)?,
            y_ensemble: coord_parser(bytes[184..188].try_into()?)?,
            inline_no: i32_from_bytes(bytes[188..192].try_into()?),
            crossline_no: i32_from_bytes(bytes[192..196].try_into()?),
            shot_point_no: i32_from_bytes(bytes[196..200].try_into()?),
            shot_point_scalar: u16_from_bytes(bytes[200..202].try_into()?),
            trace_value_measurement_unit,
            transduction_constant_mantissa: i32_from_bytes(bytes[204..208].try_into()?),
            transduction_constant_power: u16_from_bytes(bytes[208..210].try_into()?),
            transduction_units,
            trace_identifier: u16_from_bytes(bytes[212..214].try_into()?),
            time_scalar_trace_header: u16_from_bytes(bytes[214..216].try_into()?),
            source_type,
            source_energy_direction_v: u16_from_bytes(bytes[218..220].try_into()?),
            source_energy_direction_il: u16_from_bytes(bytes[220..222].try_into()?),
            source_energy_direction_xl: u16_from_bytes(bytes[222..224].try_into()?),
            source_measurement_mantissa: i32_from_bytes(bytes[224..228].try_into()?),
            source_measurement_exponent: u16_from_bytes(bytes[228..230].try_into()?),
            source_measurement_unit,
            trace_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bin_header_bytes() -> Vec<u8> {
        let mut b = vec![0u8; BIN_HEADER_LEN];
        b[96..100].copy_from_slice(&[1, 2, 3, 4]); // little-endian marker
        b[24..26].copy_from_slice(&5u16.to_le_bytes()); // Float32
        b[302..304].copy_from_slice(&1u16.to_le_bytes()); // fixed length traces
        b
    }

    #[test]
    fn bin_header_detects_endianness_and_format() {
        let bytes = sample_bin_header_bytes();
        let bh = BinHeader::from_bytes(&bytes).unwrap();
        assert!(bh.binary_flag_direction_is_le);
        assert_eq!(bh.sample_format_code, SampleFormatCode::Float32);
        assert!(bh.fixed_length_trace_flag.yes());
    }

    #[test]
    fn bin_header_rejects_wrong_length() {
        let err = BinHeader::from_bytes(&[0u8; 10]).unwrap_err();
        assert!(matches!(err, SegyError::BinHeaderLength { l: 10 }));
    }

    #[test]
    fn trace_header_round_trips_index_fields() {
        let bh = BinHeader::from_bytes(&sample_bin_header_bytes()).unwrap();
        let mut th = vec![0u8; TRACE_HEADER_LEN];
        th[20..24].copy_from_slice(&42i32.to_le_bytes());
        th[188..192].copy_from_slice(&7i32.to_le_bytes());
        th[192..196].copy_from_slice(&11i32.to_le_bytes());
        th[114..116].copy_from_slice(&500u16.to_le_bytes());

        let parsed = TraceHeader::from_bytes(&th, &bh).unwrap();
        assert_eq!(parsed.ensemble_no, 42);
        assert_eq!(parsed.inline_no, 7);
        assert_eq!(parsed.crossline_no, 11);
        assert_eq!(parsed.no_samples_in_trace, 500);
    }

    #[test]
    fn trace_header_rejects_wrong_length() {
        let bh = BinHeader::from_bytes(&sample_bin_header_bytes()).unwrap();
        let err = TraceHeader::from_bytes(&[0u8; 10], &bh).unwrap_err();
        assert!(matches!(err, SegyError::TraceHeaderLength { l: 10 }));
    }
}
