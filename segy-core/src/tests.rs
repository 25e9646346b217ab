mod header_structs {
    use crate::header_structs::*;
    #[test]
    fn test_c_safe_name() {
        let name0 = vec![b'T', b'e', b'a', b' ', b'b', b'a', b'g'];
        let processed = c_safe_name(&name0);
        assert_eq!(&processed, "Tea bag");
    }

    #[test]
    fn test_c_safe_nam1() {
        let name0 = vec![b'T', b'e', b'a', b'0', b'b', b'a', b'g'];
        let processed = c_safe_name(&name0);
        assert_eq!(&processed, "Tea0bag");
    }

    #[test]
    fn test_c_safe_name2() {
        let name0 = vec![b'T', b'e', b'a', 0, b'b', b'a', b'g'];
        let processed = c_safe_name(&name0);
        assert_eq!(&processed, "");
    }
}

mod enums {
    use crate::enums::*;
    #[test]
    fn sample_format_code_new() {
        assert_eq!(
            SampleFormatCode::new(1).unwrap(),
            SampleFormatCode::IbmFloat32
        );
        assert_eq!(SampleFormatCode::new(2).unwrap(), SampleFormatCode::Int32);
        assert_eq!(SampleFormatCode::new(3).unwrap(), SampleFormatCode::Int16);
        assert_eq!(
            SampleFormatCode::new(4).unwrap(),
            SampleFormatCode::FixPoint32
        );
        assert_eq!(SampleFormatCode::new(5).unwrap(), SampleFormatCode::Float32);
        assert_eq!(SampleFormatCode::new(6).unwrap(), SampleFormatCode::Float64);
        assert_eq!(SampleFormatCode::new(7).unwrap(), SampleFormatCode::Int24);
        assert_eq!(SampleFormatCode::new(8).unwrap(), SampleFormatCode::Int8);
        assert_eq!(SampleFormatCode::new(9).unwrap(), SampleFormatCode::Int64);
        assert_eq!(SampleFormatCode::new(10).unwrap(), SampleFormatCode::UInt32);
        assert_eq!(SampleFormatCode::new(11).unwrap(), SampleFormatCode::UInt16);
        assert_eq!(SampleFormatCode::new(12).unwrap(), SampleFormatCode::UInt64);
        assert!(SampleFormatCode::new(13).is_err());
        assert!(SampleFormatCode::new(14).is_err());
        assert_eq!(SampleFormatCode::new(15).unwrap(), SampleFormatCode::UInt24);
        assert_eq!(SampleFormatCode::new(16).unwrap(), SampleFormatCode::UInt8);
    }
    #[test]
    fn sample_format_code_datum_byte_length() {
        assert_eq!(SampleFormatCode::IbmFloat32.datum_byte_length(), 4);
        assert_eq!(SampleFormatCode::Int32.datum_byte_length(), 4);
        assert_eq!(SampleFormatCode::Int16.datum_byte_length(), 2);
        assert_eq!(SampleFormatCode::FixPoint32.datum_byte_length(), 4);
        assert_eq!(SampleFormatCode::Float32.datum_byte_length(), 4);
        assert_eq!(SampleFormatCode::Float64.datum_byte_length(), 8);
        assert_eq!(SampleFormatCode::Int24.datum_byte_length(), 3);
        assert_eq!(SampleFormatCode::Int8.datum_byte_length(), 1);
        assert_eq!(SampleFormatCode::Int64.datum_byte_length(), 8);
        assert_eq!(SampleFormatCode::UInt32.datum_byte_length(), 4);
        assert_eq!(SampleFormatCode::UInt16.datum_byte_length(), 2);
        assert_eq!(SampleFormatCode::UInt64.datum_byte_length(), 8);
        assert_eq!(SampleFormatCode::UInt24.datum_byte_length(), 3);
        assert_eq!(SampleFormatCode::UInt8.datum_byte_length(), 1);
    }

    #[test]
    fn trace_sorting_code_new() {
        use self::TraceSortingCode::*;
        assert_eq!(Other, TraceSortingCode::new(-1));
        assert_eq!(Unknown, TraceSortingCode::new(0));
        assert_eq!(AsRec, TraceSortingCode::new(1));
        assert_eq!(CDPEnsemble, TraceSortingCode::new(2));
        assert_eq!(SingleFoldContinuous, TraceSortingCode::new(3));
        assert_eq!(HorizontalStack, TraceSortingCode::new(4));
        assert_eq!(CommonSourcePoint, TraceSortingCode::new(5));
        assert_eq!(CommonReceiverPoint, TraceSortingCode::new(6));
        assert_eq!(CommonOffsetPoint, TraceSortingCode::new(7));
        assert_eq!(CommonMidPoint, TraceSortingCode::new(8));
        assert_eq!(CommonConversionPoint, TraceSortingCode::new(9));
        assert_eq!(Invalid, TraceSortingCode::new(-50));
        assert_eq!(Invalid, TraceSortingCode::new(50));
    }

    #[test]
    fn sweep_type_code_new() {
        use self::SweepTypeCode::*;
        assert_eq!(Unspecified, SweepTypeCode::new(0));
        assert_eq!(Linear, SweepTypeCode::new(1));
        assert_eq!(Parabolic, SweepTypeCode::new(2));
        assert_eq!(Exponential, SweepTypeCode::new(3));
        assert_eq!(Other, SweepTypeCode::new(4));
        assert_eq!(Invalid, SweepTypeCode::new(50));
    }

    #[test]
    fn fixed_length_traces() {
        use self::FixedLengthTraces::*;
        assert_eq!(Yes, FixedLengthTraces::new(1).unwrap());
        assert_eq!(No, FixedLengthTraces::new(0).unwrap());
        assert!(FixedLengthTraces::new(55).is_err());
        assert!(FixedLengthTraces::new(2).is_err());
        assert!(FixedLengthTraces::new(255).is_err());
        assert!(!FixedLengthTraces::No.yes());
        assert!(FixedLengthTraces::No.no());
        assert!(!FixedLengthTraces::Yes.no());
        assert!(FixedLengthTraces::Yes.yes());
    }

    #[test]
    fn trace_id_code_new() {
        use self::TraceIdCode::*;
        assert_eq!(Other, TraceIdCode::new(-1));
        assert_eq!(Unknown, TraceIdCode::new(0));
        assert_eq!(TimeDomainSeismic, TraceIdCode::new(1));
        assert_eq!(Invalid, TraceIdCode::new(255));
        assert_eq!(Invalid, TraceIdCode::new(-255));
    }

    #[test]
    fn data_use_new() {
        use self::DataUse::*;
        assert_eq!(Unspecified, DataUse::new(0));
        assert_eq!(Production, DataUse::new(1));
        assert_eq!(Test, DataUse::new(2));
        assert_eq!(Invalid, DataUse::new(3));
        assert_eq!(Invalid, DataUse::new(40));
    }

    #[test]
    fn canonicalize_revision_defaults_to_rev0() {
        assert_eq!(canonicalize_revision(0x0000), SegyRevision::Rev0);
        assert_eq!(canonicalize_revision(0x0100), SegyRevision::Rev1);
        assert_eq!(canonicalize_revision(0x0001), SegyRevision::Rev0);
        assert_eq!(canonicalize_revision(0x0200), SegyRevision::Rev0);
    }
}

mod bitconverter {
    use crate::bitconverter::*;

    #[test]
    fn test_ascii_bytes_to_string() {
        let name0 = vec![b'T', b'e', b'a', b' ', b'b', b'a', b'g'];
        let processed = ascii_bytes_to_string(&name0);
        assert_eq!(&processed, "Tea bag");
    }

    #[test]
    fn test_ascii_bytes_to_string1() {
        let name0 = vec![b'T', b'e', b'a', b'0', b'b', b'a', b'g'];
        let processed = ascii_bytes_to_string(&name0);
        assert_eq!(&processed, "Tea0bag");
    }

    #[test]
    fn test_ascii_bytes_to_string2() {
        let name0 = vec![b'T', b'e', b'a', 0, b'b', b'a', b'g'];
        let processed = ascii_bytes_to_string(&name0);
        assert_eq!(&processed, "Tea");
    }

    #[test]
    /// This tests whether the converter correctly converts bytes back to the correct number.
    fn test_converter_chooser() {
        use crate::enums::SampleFormatCode::*;

        for i in i8::MIN..i8::MAX {
            assert_eq!(
                converter_chooser(Int8, false).unwrap()(&(i as i8).to_be_bytes()).unwrap(),
                i as f32
            );
            assert_eq!(
                converter_chooser(Int8, true).unwrap()(&(i as i8).to_le_bytes()).unwrap(),
                i as f32
            );
            let i = i as u8;
            assert_eq!(
                converter_chooser(UInt8, false).unwrap()(&(i as u8).to_be_bytes()).unwrap(),
                i as f32
            );
            assert_eq!(
                converter_chooser(UInt8, true).unwrap()(&(i as u8).to_le_bytes()).unwrap(),
                i as f32
            );
        }

        for i in (i32::MIN..i32::MAX).step_by(10_000) {
            assert_eq!(
                converter_chooser(Int32, false).unwrap()(&i.to_be_bytes()).unwrap(),
                i as f32
            );
            assert_eq!(
                converter_chooser(Int64, false).unwrap()(&(i as i64).to_be_bytes()).unwrap(),
                i as f32
            );
            assert_eq!(
                converter_chooser(Float32, true).unwrap()(&(i as f32).to_le_bytes()).unwrap(),
                i as f32
            );

            let i = i as u32;
            assert_eq!(
                converter_chooser(UInt32, false).unwrap()(&(i as u32).to_be_bytes()).unwrap(),
                i as f32
            );
            assert_eq!(
                converter_chooser(UInt64, false).unwrap()(&(i as u64).to_be_bytes()).unwrap(),
                i as f32
            );
        }
    }
}

mod settings {
    use crate::settings::*;

    macro_rules! test_set_get {
        ($setter:ident, $getter:ident, $field:ident, $in_val:expr, $out_val:expr) => {
            let mut default = SegySettings::default();
            default.$setter($in_val);
            assert_eq!(default.$field, $out_val);
            assert_eq!(default.$getter(), $out_val);
        };
    }

    #[test]
    fn test_default() {
        let expected = SegySettings {
            inline_min_max: None,
            crossline_min_max: None,
        };
        assert_eq!(SegySettings::default(), expected);
    }

    #[test]
    fn test_inline_min_max() {
        test_set_get!(
            set_inline_min_max,
            get_inline_min_max,
            inline_min_max,
            [-100, 1000],
            Some([-100, 1000])
        );
    }

    #[test]
    fn test_crossline_min_max() {
        test_set_get!(
            set_crossline_min_max,
            get_crossline_min_max,
            crossline_min_max,
            [-100, 1000],
            Some([-100, 1000])
        );
    }

    #[test]
    fn test_trace_in_bounds_unset() {
        let settings = SegySettings::default();
        assert!(settings.trace_in_bounds(99999, -99999));
    }

    #[test]
    fn test_trace_in_bounds_set() {
        let mut settings = SegySettings::default();
        settings.set_inline_min_max([50, 2000]);
        assert!(!settings.trace_in_bounds(99999, -99999));
        assert!(settings.trace_in_bounds(100, -99999));

        settings.set_crossline_min_max([50, 2000]);
        assert!(!settings.trace_in_bounds(100, -99999));
        assert!(settings.trace_in_bounds(100, 100));
    }
}
