// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Advanced-control timer (TIM1).
//!
//! `CCMR1` and `CCMR2` describe both the output compare and the input
//! capture views of the same bits; which one applies depends on the
//! channel's `CCxS` field. The general purpose timers in [`crate::tim2`]
//! and [`crate::tim16`] reuse the bitfields defined here wherever the
//! layouts match.

use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map::APB2PERIPH_BASE;
use crate::static_ref::StaticRef;

register_structs! {
    /// Advanced-control timer
    pub Tim1Registers {
        /// Control register 1
        (0x000 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// Control register 2
        (0x004 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// Slave mode control register
        (0x008 => pub smcr: ReadWrite<u32, SMCR::Register>),
        /// DMA/interrupt enable register
        (0x00C => pub dier: ReadWrite<u32, DIER::Register>),
        /// Status register
        (0x010 => pub sr: ReadWrite<u32, SR::Register>),
        /// Event generation register
        (0x014 => pub egr: WriteOnly<u32, EGR::Register>),
        /// Capture/compare mode register 1
        (0x018 => pub ccmr1: ReadWrite<u32, CCMR1::Register>),
        /// Capture/compare mode register 2
        (0x01C => pub ccmr2: ReadWrite<u32, CCMR2::Register>),
        /// Capture/compare enable register
        (0x020 => pub ccer: ReadWrite<u32, CCER::Register>),
        /// Counter
        (0x024 => pub cnt: ReadWrite<u32, CNT::Register>),
        /// Prescaler
        (0x028 => pub psc: ReadWrite<u32, VALUE16::Register>),
        /// Auto-reload register
        (0x02C => pub arr: ReadWrite<u32, VALUE16::Register>),
        /// Repetition counter register
        (0x030 => pub rcr: ReadWrite<u32, VALUE16::Register>),
        /// Capture/compare registers 1 to 4
        (0x034 => pub ccr: [ReadWrite<u32, VALUE16::Register>; 4]),
        /// Break and dead-time register
        (0x044 => pub bdtr: ReadWrite<u32, BDTR::Register>),
        /// DMA control register
        (0x048 => pub dcr: ReadWrite<u32, DCR::Register>),
        /// DMA address for full transfer
        (0x04C => pub dmar: ReadWrite<u32>),
        /// Option register 1
        (0x050 => pub or1: ReadWrite<u32, OR1::Register>),
        /// Capture/compare mode register 3
        (0x054 => pub ccmr3: ReadWrite<u32, CCMR3::Register>),
        /// Capture/compare register 5
        (0x058 => pub ccr5: ReadWrite<u32, CCR5::Register>),
        /// Capture/compare register 6
        (0x05C => pub ccr6: ReadWrite<u32, VALUE16::Register>),
        /// Alternate function option register 1
        (0x060 => pub af1: ReadWrite<u32, AF1::Register>),
        /// Alternate function option register 2
        (0x064 => pub af2: ReadWrite<u32, AF2::Register>),
        /// Timer input selection register
        (0x068 => pub tisel: ReadWrite<u32, TISEL::Register>),
        (0x06C => @END),
    }
}

register_bitfields![u32,
    pub CR1 [
        /// UIF status bit remapping into `CNT[31]`
        UIFREMAP OFFSET(11) NUMBITS(1) [],
        /// Clock division
        CKD OFFSET(8) NUMBITS(2) [
            Div1 = 0b00,
            Div2 = 0b01,
            Div4 = 0b10
        ],
        /// Auto-reload preload enable
        ARPE OFFSET(7) NUMBITS(1) [],
        /// Center-aligned mode selection
        CMS OFFSET(5) NUMBITS(2) [
            EdgeAligned = 0b00,
            CenterAligned1 = 0b01,
            CenterAligned2 = 0b10,
            CenterAligned3 = 0b11
        ],
        /// Direction
        DIR OFFSET(4) NUMBITS(1) [
            Up = 0,
            Down = 1
        ],
        /// One-pulse mode
        OPM OFFSET(3) NUMBITS(1) [],
        /// Update request source
        URS OFFSET(2) NUMBITS(1) [],
        /// Update disable
        UDIS OFFSET(1) NUMBITS(1) [],
        /// Counter enable
        CEN OFFSET(0) NUMBITS(1) []
    ],
    pub CR2 [
        /// Master mode selection 2
        MMS2 OFFSET(20) NUMBITS(4) [],
        /// Output idle state 6
        OIS6 OFFSET(18) NUMBITS(1) [],
        /// Output idle state 5
        OIS5 OFFSET(16) NUMBITS(1) [],
        /// Output idle state 4
        OIS4 OFFSET(14) NUMBITS(1) [],
        /// Output idle state 3 (OC3N output)
        OIS3N OFFSET(13) NUMBITS(1) [],
        /// Output idle state 3
        OIS3 OFFSET(12) NUMBITS(1) [],
        /// Output idle state 2 (OC2N output)
        OIS2N OFFSET(11) NUMBITS(1) [],
        /// Output idle state 2
        OIS2 OFFSET(10) NUMBITS(1) [],
        /// Output idle state 1 (OC1N output)
        OIS1N OFFSET(9) NUMBITS(1) [],
        /// Output idle state 1
        OIS1 OFFSET(8) NUMBITS(1) [],
        /// TI1 selection
        TI1S OFFSET(7) NUMBITS(1) [],
        /// Master mode selection
        MMS OFFSET(4) NUMBITS(3) [
            Reset = 0b000,
            Enable = 0b001,
            Update = 0b010,
            ComparePulse = 0b011,
            CompareOc1Ref = 0b100,
            CompareOc2Ref = 0b101,
            CompareOc3Ref = 0b110,
            CompareOc4Ref = 0b111
        ],
        /// Capture/compare DMA selection
        CCDS OFFSET(3) NUMBITS(1) [],
        /// Capture/compare control update selection
        CCUS OFFSET(2) NUMBITS(1) [],
        /// Capture/compare preloaded control
        CCPC OFFSET(0) NUMBITS(1) []
    ],
    pub SMCR [
        /// Trigger selection, bits 4:3
        TS_4_3 OFFSET(20) NUMBITS(2) [],
        /// Slave mode selection, bit 3
        SMS_3 OFFSET(16) NUMBITS(1) [],
        /// External trigger polarity
        ETP OFFSET(15) NUMBITS(1) [],
        /// External clock enable
        ECE OFFSET(14) NUMBITS(1) [],
        /// External trigger prescaler
        ETPS OFFSET(12) NUMBITS(2) [],
        /// External trigger filter
        ETF OFFSET(8) NUMBITS(4) [],
        /// Master/slave mode
        MSM OFFSET(7) NUMBITS(1) [],
        /// Trigger selection
        TS OFFSET(4) NUMBITS(3) [],
        /// OCREF clear selection
        OCCS OFFSET(3) NUMBITS(1) [],
        /// Slave mode selection
        SMS OFFSET(0) NUMBITS(3) [
            Disabled = 0b000,
            Encoder1 = 0b001,
            Encoder2 = 0b010,
            Encoder3 = 0b011,
            Reset = 0b100,
            Gated = 0b101,
            Trigger = 0b110,
            ExternalClock1 = 0b111
        ]
    ],
    pub DIER [
        /// Trigger DMA request enable
        TDE OFFSET(14) NUMBITS(1) [],
        /// COM DMA request enable
        COMDE OFFSET(13) NUMBITS(1) [],
        CC4DE OFFSET(12) NUMBITS(1) [],
        CC3DE OFFSET(11) NUMBITS(1) [],
        CC2DE OFFSET(10) NUMBITS(1) [],
        CC1DE OFFSET(9) NUMBITS(1) [],
        /// Update DMA request enable
        UDE OFFSET(8) NUMBITS(1) [],
        /// Break interrupt enable
        BIE OFFSET(7) NUMBITS(1) [],
        /// Trigger interrupt enable
        TIE OFFSET(6) NUMBITS(1) [],
        /// COM interrupt enable
        COMIE OFFSET(5) NUMBITS(1) [],
        CC4IE OFFSET(4) NUMBITS(1) [],
        CC3IE OFFSET(3) NUMBITS(1) [],
        CC2IE OFFSET(2) NUMBITS(1) [],
        CC1IE OFFSET(1) NUMBITS(1) [],
        /// Update interrupt enable
        UIE OFFSET(0) NUMBITS(1) []
    ],
    pub SR [
        /// Compare 6 interrupt flag
        CC6IF OFFSET(17) NUMBITS(1) [],
        /// Compare 5 interrupt flag
        CC5IF OFFSET(16) NUMBITS(1) [],
        /// System break interrupt flag
        SBIF OFFSET(13) NUMBITS(1) [],
        CC4OF OFFSET(12) NUMBITS(1) [],
        CC3OF OFFSET(11) NUMBITS(1) [],
        CC2OF OFFSET(10) NUMBITS(1) [],
        CC1OF OFFSET(9) NUMBITS(1) [],
        /// Break 2 interrupt flag
        B2IF OFFSET(8) NUMBITS(1) [],
        /// Break interrupt flag
        BIF OFFSET(7) NUMBITS(1) [],
        /// Trigger interrupt flag
        TIF OFFSET(6) NUMBITS(1) [],
        /// COM interrupt flag
        COMIF OFFSET(5) NUMBITS(1) [],
        CC4IF OFFSET(4) NUMBITS(1) [],
        CC3IF OFFSET(3) NUMBITS(1) [],
        CC2IF OFFSET(2) NUMBITS(1) [],
        CC1IF OFFSET(1) NUMBITS(1) [],
        /// Update interrupt flag
        UIF OFFSET(0) NUMBITS(1) []
    ],
    pub EGR [
        /// Break 2 generation
        B2G OFFSET(8) NUMBITS(1) [],
        /// Break generation
        BG OFFSET(7) NUMBITS(1) [],
        /// Trigger generation
        TG OFFSET(6) NUMBITS(1) [],
        /// Capture/compare control update generation
        COMG OFFSET(5) NUMBITS(1) [],
        CC4G OFFSET(4) NUMBITS(1) [],
        CC3G OFFSET(3) NUMBITS(1) [],
        CC2G OFFSET(2) NUMBITS(1) [],
        CC1G OFFSET(1) NUMBITS(1) [],
        /// Update generation
        UG OFFSET(0) NUMBITS(1) []
    ],
    pub CCMR1 [
        /// Output compare 2 mode, bit 3
        OC2M_3 OFFSET(24) NUMBITS(1) [],
        /// Output compare 1 mode, bit 3
        OC1M_3 OFFSET(16) NUMBITS(1) [],
        /// Output compare 2 clear enable
        OC2CE OFFSET(15) NUMBITS(1) [],
        /// Output compare 2 mode
        OC2M OFFSET(12) NUMBITS(3) [
            Frozen = 0b000,
            ActiveOnMatch = 0b001,
            InactiveOnMatch = 0b010,
            Toggle = 0b011,
            ForceInactive = 0b100,
            ForceActive = 0b101,
            Pwm1 = 0b110,
            Pwm2 = 0b111
        ],
        /// Output compare 2 preload enable
        OC2PE OFFSET(11) NUMBITS(1) [],
        /// Output compare 2 fast enable
        OC2FE OFFSET(10) NUMBITS(1) [],
        /// Capture/compare 2 selection
        CC2S OFFSET(8) NUMBITS(2) [
            Output = 0b00,
            InputDirect = 0b01,
            InputIndirect = 0b10,
            InputTrc = 0b11
        ],
        /// Output compare 1 clear enable
        OC1CE OFFSET(7) NUMBITS(1) [],
        /// Output compare 1 mode
        OC1M OFFSET(4) NUMBITS(3) [
            Frozen = 0b000,
            ActiveOnMatch = 0b001,
            InactiveOnMatch = 0b010,
            Toggle = 0b011,
            ForceInactive = 0b100,
            ForceActive = 0b101,
            Pwm1 = 0b110,
            Pwm2 = 0b111
        ],
        /// Output compare 1 preload enable
        OC1PE OFFSET(3) NUMBITS(1) [],
        /// Output compare 1 fast enable
        OC1FE OFFSET(2) NUMBITS(1) [],
        /// Capture/compare 1 selection
        CC1S OFFSET(0) NUMBITS(2) [
            Output = 0b00,
            InputDirect = 0b01,
            InputIndirect = 0b10,
            InputTrc = 0b11
        ],
        /// Input capture 2 filter
        IC2F OFFSET(12) NUMBITS(4) [],
        /// Input capture 2 prescaler
        IC2PSC OFFSET(10) NUMBITS(2) [],
        /// Input capture 1 filter
        IC1F OFFSET(4) NUMBITS(4) [],
        /// Input capture 1 prescaler
        IC1PSC OFFSET(2) NUMBITS(2) []
    ],
    pub CCMR2 [
        /// Output compare 4 mode, bit 3
        OC4M_3 OFFSET(24) NUMBITS(1) [],
        /// Output compare 3 mode, bit 3
        OC3M_3 OFFSET(16) NUMBITS(1) [],
        /// Output compare 4 clear enable
        OC4CE OFFSET(15) NUMBITS(1) [],
        /// Output compare 4 mode
        OC4M OFFSET(12) NUMBITS(3) [
            Frozen = 0b000,
            ActiveOnMatch = 0b001,
            InactiveOnMatch = 0b010,
            Toggle = 0b011,
            ForceInactive = 0b100,
            ForceActive = 0b101,
            Pwm1 = 0b110,
            Pwm2 = 0b111
        ],
        /// Output compare 4 preload enable
        OC4PE OFFSET(11) NUMBITS(1) [],
        /// Output compare 4 fast enable
        OC4FE OFFSET(10) NUMBITS(1) [],
        /// Capture/compare 4 selection
        CC4S OFFSET(8) NUMBITS(2) [
            Output = 0b00,
            InputDirect = 0b01,
            InputIndirect = 0b10,
            InputTrc = 0b11
        ],
        /// Output compare 3 clear enable
        OC3CE OFFSET(7) NUMBITS(1) [],
        /// Output compare 3 mode
        OC3M OFFSET(4) NUMBITS(3) [
            Frozen = 0b000,
            ActiveOnMatch = 0b001,
            InactiveOnMatch = 0b010,
            Toggle = 0b011,
            ForceInactive = 0b100,
            ForceActive = 0b101,
            Pwm1 = 0b110,
            Pwm2 = 0b111
        ],
        /// Output compare 3 preload enable
        OC3PE OFFSET(3) NUMBITS(1) [],
        /// Output compare 3 fast enable
        OC3FE OFFSET(2) NUMBITS(1) [],
        /// Capture/compare 3 selection
        CC3S OFFSET(0) NUMBITS(2) [
            Output = 0b00,
            InputDirect = 0b01,
            InputIndirect = 0b10,
            InputTrc = 0b11
        ],
        /// Input capture 4 filter
        IC4F OFFSET(12) NUMBITS(4) [],
        /// Input capture 4 prescaler
        IC4PSC OFFSET(10) NUMBITS(2) [],
        /// Input capture 3 filter
        IC3F OFFSET(4) NUMBITS(4) [],
        /// Input capture 3 prescaler
        IC3PSC OFFSET(2) NUMBITS(2) []
    ],
    pub CCER [
        CC6P OFFSET(21) NUMBITS(1) [],
        CC6E OFFSET(20) NUMBITS(1) [],
        CC5P OFFSET(17) NUMBITS(1) [],
        CC5E OFFSET(16) NUMBITS(1) [],
        CC4NP OFFSET(15) NUMBITS(1) [],
        CC4P OFFSET(13) NUMBITS(1) [],
        CC4E OFFSET(12) NUMBITS(1) [],
        CC3NP OFFSET(11) NUMBITS(1) [],
        CC3NE OFFSET(10) NUMBITS(1) [],
        CC3P OFFSET(9) NUMBITS(1) [],
        CC3E OFFSET(8) NUMBITS(1) [],
        CC2NP OFFSET(7) NUMBITS(1) [],
        CC2NE OFFSET(6) NUMBITS(1) [],
        CC2P OFFSET(5) NUMBITS(1) [],
        CC2E OFFSET(4) NUMBITS(1) [],
        /// Capture/compare 1 complementary output polarity
        CC1NP OFFSET(3) NUMBITS(1) [],
        /// Capture/compare 1 complementary output enable
        CC1NE OFFSET(2) NUMBITS(1) [],
        /// Capture/compare 1 output polarity
        CC1P OFFSET(1) NUMBITS(1) [],
        /// Capture/compare 1 output enable
        CC1E OFFSET(0) NUMBITS(1) []
    ],
    pub CNT [
        /// Copy of `SR.UIF` when `CR1.UIFREMAP` is set
        UIFCPY OFFSET(31) NUMBITS(1) [],
        CNT OFFSET(0) NUMBITS(16) []
    ],
    pub VALUE16 [
        VALUE OFFSET(0) NUMBITS(16) []
    ],
    pub BDTR [
        /// Break 2 bidirectional
        BK2BID OFFSET(29) NUMBITS(1) [],
        /// Break bidirectional
        BKBID OFFSET(28) NUMBITS(1) [],
        /// Break 2 disarm
        BK2DSRM OFFSET(27) NUMBITS(1) [],
        /// Break disarm
        BKDSRM OFFSET(26) NUMBITS(1) [],
        /// Break 2 polarity
        BK2P OFFSET(25) NUMBITS(1) [],
        /// Break 2 enable
        BK2E OFFSET(24) NUMBITS(1) [],
        /// Break 2 filter
        BK2F OFFSET(20) NUMBITS(4) [],
        /// Break filter
        BKF OFFSET(16) NUMBITS(4) [],
        /// Main output enable
        MOE OFFSET(15) NUMBITS(1) [],
        /// Automatic output enable
        AOE OFFSET(14) NUMBITS(1) [],
        /// Break polarity
        BKP OFFSET(13) NUMBITS(1) [],
        /// Break enable
        BKE OFFSET(12) NUMBITS(1) [],
        /// Off-state selection for run mode
        OSSR OFFSET(11) NUMBITS(1) [],
        /// Off-state selection for idle mode
        OSSI OFFSET(10) NUMBITS(1) [],
        /// Lock configuration
        LOCK OFFSET(8) NUMBITS(2) [
            Off = 0b00,
            Level1 = 0b01,
            Level2 = 0b10,
            Level3 = 0b11
        ],
        /// Dead-time generator setup
        DTG OFFSET(0) NUMBITS(8) []
    ],
    pub DCR [
        /// DMA burst length
        DBL OFFSET(8) NUMBITS(5) [],
        /// DMA base address
        DBA OFFSET(0) NUMBITS(5) []
    ],
    pub OR1 [
        /// OCREF_CLR source selection
        OCREF_CLR OFFSET(0) NUMBITS(2) [
            Comp1 = 0b00,
            Comp2 = 0b01
        ]
    ],
    pub CCMR3 [
        OC6M_3 OFFSET(24) NUMBITS(1) [],
        OC5M_3 OFFSET(16) NUMBITS(1) [],
        OC6CE OFFSET(15) NUMBITS(1) [],
        OC6M OFFSET(12) NUMBITS(3) [],
        OC6PE OFFSET(11) NUMBITS(1) [],
        OC6FE OFFSET(10) NUMBITS(1) [],
        OC5CE OFFSET(7) NUMBITS(1) [],
        OC5M OFFSET(4) NUMBITS(3) [],
        OC5PE OFFSET(3) NUMBITS(1) [],
        OC5FE OFFSET(2) NUMBITS(1) []
    ],
    pub CCR5 [
        /// Group channel 5 and channel 3
        GC5C3 OFFSET(31) NUMBITS(1) [],
        /// Group channel 5 and channel 2
        GC5C2 OFFSET(30) NUMBITS(1) [],
        /// Group channel 5 and channel 1
        GC5C1 OFFSET(29) NUMBITS(1) [],
        CCR5 OFFSET(0) NUMBITS(16) []
    ],
    pub AF1 [
        /// ETR source selection
        ETRSEL OFFSET(14) NUMBITS(4) [],
        /// BRK COMP2 input polarity
        BKCMP2P OFFSET(11) NUMBITS(1) [],
        /// BRK COMP1 input polarity
        BKCMP1P OFFSET(10) NUMBITS(1) [],
        /// BRK BKIN input polarity
        BKINP OFFSET(9) NUMBITS(1) [],
        /// BRK COMP2 enable
        BKCMP2E OFFSET(2) NUMBITS(1) [],
        /// BRK COMP1 enable
        BKCMP1E OFFSET(1) NUMBITS(1) [],
        /// BRK BKIN input enable
        BKINE OFFSET(0) NUMBITS(1) []
    ],
    pub AF2 [
        BK2CMP2P OFFSET(11) NUMBITS(1) [],
        BK2CMP1P OFFSET(10) NUMBITS(1) [],
        BK2INP OFFSET(9) NUMBITS(1) [],
        BK2CMP2E OFFSET(2) NUMBITS(1) [],
        BK2CMP1E OFFSET(1) NUMBITS(1) [],
        BK2INE OFFSET(0) NUMBITS(1) []
    ],
    pub TISEL [
        TI4SEL OFFSET(24) NUMBITS(4) [],
        TI3SEL OFFSET(16) NUMBITS(4) [],
        TI2SEL OFFSET(8) NUMBITS(4) [],
        TI1SEL OFFSET(0) NUMBITS(4) []
    ]
];

pub const TIM1_BASE: StaticRef<Tim1Registers> =
    unsafe { StaticRef::new((APB2PERIPH_BASE + 0x2C00) as *const Tim1Registers) };

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{offset_of, size_of};
    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    #[test]
    fn register_offsets() {
        assert_eq!(offset_of!(Tim1Registers, cnt), 0x24);
        assert_eq!(offset_of!(Tim1Registers, rcr), 0x30);
        assert_eq!(offset_of!(Tim1Registers, ccr), 0x34);
        assert_eq!(offset_of!(Tim1Registers, bdtr), 0x44);
        assert_eq!(offset_of!(Tim1Registers, or1), 0x50);
        assert_eq!(offset_of!(Tim1Registers, ccr6), 0x5C);
        assert_eq!(offset_of!(Tim1Registers, tisel), 0x68);
        assert_eq!(size_of::<Tim1Registers>(), 0x6C);
        assert_eq!(TIM1_BASE.addr(), 0x4001_2C00);
    }

    #[test]
    fn pwm_mode_1_on_channel_2() {
        let ccmr1 = InMemoryRegister::<u32, CCMR1::Register>::new(0);
        ccmr1.write(CCMR1::CC2S::Output + CCMR1::OC2M::Pwm1 + CCMR1::OC2PE::SET);
        assert_eq!(ccmr1.get(), (0b110 << 12) | (1 << 11));
    }

    #[test]
    fn input_and_output_views_overlap() {
        assert_eq!(CCMR1::IC1PSC.shift, CCMR1::OC1FE.shift);
        assert_eq!(CCMR1::IC1F.shift, CCMR1::OC1M.shift);
        assert_eq!(CCMR2::IC4F.shift, CCMR2::OC4M.shift);
    }

    #[test]
    fn main_output_enable() {
        let bdtr = InMemoryRegister::<u32, BDTR::Register>::new(0);
        bdtr.write(BDTR::MOE::SET + BDTR::DTG.val(0x20));
        assert!(bdtr.is_set(BDTR::MOE));
        assert_eq!(bdtr.get(), 0x8020);
    }
}
